//! Login and registration against the remote GraphQL API.
//!
//! Both calls are users-permissions mutations POSTed as a standard
//! `{query, variables}` envelope. GraphQL-level errors, bad statuses and
//! transport failures all come back as the message shown in the modal.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::config;

const LOGIN_MUTATION: &str = r#"
mutation Login($input: UsersPermissionsLoginInput!) {
  login(input: $input) {
    jwt
    user {
      id
      documentId
      username
      email
      confirmed
      blocked
      role {
        id
        name
        type
      }
    }
  }
}
"#;

const REGISTER_MUTATION: &str = r#"
mutation Register($input: UsersPermissionsRegisterInput!) {
  register(input: $input) {
    jwt
    user {
      id
      documentId
      username
      email
      confirmed
      blocked
      role {
        id
        name
        type
      }
    }
  }
}
"#;

#[derive(Serialize)]
pub struct LoginInput {
    pub identifier: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(rename = "documentId", default)]
    pub document_id: Option<String>,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub confirmed: bool,
    #[serde(default)]
    pub blocked: bool,
    #[serde(default)]
    pub role: Option<Role>,
}

/// What a successful mutation yields: the JWT plus the user snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub jwt: String,
    pub user: AuthUser,
}

#[derive(Serialize)]
struct GraphqlRequest<V: Serialize> {
    query: &'static str,
    variables: V,
}

#[derive(Deserialize)]
struct GraphqlResponse<D> {
    data: Option<D>,
    errors: Option<Vec<GraphqlError>>,
}

#[derive(Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Serialize)]
struct LoginVariables {
    input: LoginInput,
}

#[derive(Deserialize)]
struct LoginData {
    login: AuthSession,
}

#[derive(Serialize)]
struct RegisterVariables {
    input: RegisterInput,
}

#[derive(Deserialize)]
struct RegisterData {
    register: AuthSession,
}

pub async fn login(input: LoginInput) -> Result<AuthSession, String> {
    let data: LoginData = execute(LOGIN_MUTATION, LoginVariables { input }).await?;
    Ok(data.login)
}

pub async fn register(input: RegisterInput) -> Result<AuthSession, String> {
    let data: RegisterData = execute(REGISTER_MUTATION, RegisterVariables { input }).await?;
    Ok(data.register)
}

async fn execute<V, D>(query: &'static str, variables: V) -> Result<D, String>
where
    V: Serialize,
    D: for<'de> Deserialize<'de>,
{
    let response = Request::post(config::get_graphql_url())
        .json(&GraphqlRequest { query, variables })
        .map_err(|e| format!("Failed to encode request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(format!("Server returned status {}", response.status()));
    }

    let body: GraphqlResponse<D> = response
        .json()
        .await
        .map_err(|_| "Failed to parse server response".to_string())?;

    if let Some(mut errors) = body.errors {
        if !errors.is_empty() {
            return Err(errors.swap_remove(0).message);
        }
    }
    body.data
        .ok_or_else(|| "Empty server response".to_string())
}
