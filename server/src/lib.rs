// Request flow:
// 1. POST /api/auth/login with a username/password pair
// 2. The credential verifier yields a role
// 3. The issuer signs the role into a bearer token
// 4. Protected routes validate the token and check the declared role
//
// System components:
//  - Credential verifier
//  - Token issuer / validator
//  - Authorization gate
//  - Book catalog (the protected collaborator)

pub mod auth;
pub mod catalog;
pub mod config;
pub mod http;
pub mod time;
