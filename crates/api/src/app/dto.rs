use serde::{Deserialize, Serialize};
use serde_json::Value;

use usuarios_core::DomainResult;
use usuarios_directory::{NewUser, User, UserPatch};

/// Write bodies are extracted as a JSON object first. Derived struct
/// deserializers also accept arrays (positional fields), which must not count
/// as a valid body.
pub type JsonObject = serde_json::Map<String, Value>;

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /usuarios`. Both fields are required; presence is checked in
/// `into_new_user` so a missing field maps to a single 400 message.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub nombre: Option<String>,
    pub email: Option<String>,
}

impl CreateUserRequest {
    pub fn from_object(body: JsonObject) -> serde_json::Result<Self> {
        serde_json::from_value(Value::Object(body))
    }

    /// `None` when either field is absent.
    pub fn into_new_user(self) -> Option<DomainResult<NewUser>> {
        match (self.nombre, self.email) {
            (Some(nombre), Some(email)) => Some(NewUser::new(nombre, email)),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub nombre: Option<String>,
    pub email: Option<String>,
}

impl UpdateUserRequest {
    pub fn from_object(body: JsonObject) -> serde_json::Result<Self> {
        serde_json::from_value(Value::Object(body))
    }

    pub fn into_patch(self) -> UserPatch {
        UserPatch::new(self.nombre, self.email)
    }
}

/// Query of `GET /buscar`. A repeated `nombre` keeps its first value.
#[derive(Debug, Default)]
pub struct SearchParams {
    pub nombre: Option<String>,
}

impl SearchParams {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let nombre = pairs
            .into_iter()
            .find(|(key, _)| key == "nombre")
            .map(|(_, value)| value);
        Self { nombre }
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub usuarios: Vec<User>,
    pub total: usize,
}

impl From<Vec<User>> for UserListResponse {
    fn from(usuarios: Vec<User>) -> Self {
        let total = usuarios.len();
        Self { usuarios, total }
    }
}

#[derive(Debug, Serialize)]
pub struct UserWrittenResponse {
    pub mensaje: &'static str,
    pub usuario: User,
}

#[derive(Debug, Serialize)]
pub struct UserDeletedResponse {
    pub mensaje: &'static str,
    pub usuario_eliminado: User,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub busqueda: String,
    pub resultados: Vec<User>,
    pub total_encontrados: usize,
}

impl SearchResponse {
    pub fn new(busqueda: String, resultados: Vec<User>) -> Self {
        let total_encontrados = resultados.len();
        Self {
            busqueda,
            resultados,
            total_encontrados,
        }
    }
}
