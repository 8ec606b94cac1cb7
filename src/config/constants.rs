//! Application-wide constants
//!
//! Centralized location for magic values and client-facing messages.

// =============================================================================
// Authentication & Security
// =============================================================================

/// bcrypt work factor used when `HASH_COST` is not set
pub const DEFAULT_HASH_COST: u32 = 12;

/// Work factors bcrypt accepts
pub const HASH_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5000;

/// Environment name that turns on per-request tracing
pub const ENV_DEVELOPMENT: &str = "development";

/// Environment name assumed when `NODE_ENV` is not set
pub const ENV_PRODUCTION: &str = "production";

// =============================================================================
// Database
// =============================================================================

/// Database host used to compose the connection string
pub const DEFAULT_DB_HOST: &str = "localhost:5432";

// =============================================================================
// Messages
// =============================================================================

pub const MSG_WELCOME: &str = "Bem vindo a minha api";

pub const MSG_NOTE_TITLE_REQUIRED: &str = "O título é obrigatório";
pub const MSG_NOTE_SAVED: &str = "Nota adicionada com sucesso";

pub const MSG_USER_NOT_FOUND: &str = "Usuário não encontrado";

pub const MSG_NAME_REQUIRED: &str = "O nome é obrigatório!";
pub const MSG_EMAIL_REQUIRED: &str = "O email é obrigatório!";
pub const MSG_PASSWORD_REQUIRED: &str = "A senha é obrigatória!";
pub const MSG_PASSWORD_MISMATCH: &str = "As senhas não conferem!";
pub const MSG_EMAIL_TAKEN: &str = "Por favor, utilize outro e-mail!";
pub const MSG_USER_CREATED: &str = "Usuário criado com sucesso";

pub const MSG_LOGIN_UNKNOWN_USER: &str = "Usuário não encontrado no sistema";
pub const MSG_LOGIN_WRONG_PASSWORD: &str = "Senha inválida";
pub const MSG_LOGIN_SUCCESS: &str = "Autenticação realizada com sucesso";

pub const MSG_ACCESS_DENIED: &str = "Acesso Negado!";
pub const MSG_INVALID_TOKEN: &str = "Token Inválido!";

pub const MSG_INVALID_BODY: &str = "Corpo da requisição inválido";

pub const MSG_INTERNAL_ERROR: &str = "Aconteceu um erro no servidor, tente novamente";
pub const MSG_SERVER_UNAVAILABLE: &str =
    "Algo errado aconteceu com o Servidor, tente novamente mais tarde";
