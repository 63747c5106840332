//! User-facing texts written into the page by the login form.
//!
//! Every outcome the user can see maps to exactly one of these strings, except
//! server-reported rejections which are shown verbatim.

/// Shown when the email or password field is empty after trimming.
pub const FILL_ALL_FIELDS: &str = "Por favor, preencha todos os campos.";

/// Shown when the email does not pass [`crate::domain::email::is_valid_email`].
pub const INVALID_EMAIL: &str = "Por favor, insira um e-mail válido.";

/// Shown when the server rejects the login without a usable `detail`.
pub const UNKNOWN_ERROR: &str = "Ocorreu um erro desconhecido.";

/// Shown when the request never completes.
pub const CONNECTION_FAILURE: &str = "Falha ao conectar com o servidor.";

/// Session key holding the authentication flag.
pub const AUTH_FLAG_KEY: &str = "isAuthenticated";

/// Session key holding the serialized login response body.
pub const USER_DATA_KEY: &str = "userData";

/// Value written under [`AUTH_FLAG_KEY`] after a successful login.
pub const AUTH_FLAG_VALUE: &str = "true";

/// Masked password glyph (closed eye).
pub const GLYPH_MASKED: &str = "👁️";

/// Visible password glyph (open eye).
pub const GLYPH_VISIBLE: &str = "🙈";
