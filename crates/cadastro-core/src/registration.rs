//! # Registration Payload Checks
//!
//! Server-side normalization of the company registration payload before it
//! is handed to storage.
//!
//! ## Document enforcement
//!
//! The deployed backend only strips punctuation from the document and never
//! runs the checksum, so a correctly shaped but invalid CPF/CNPJ can be
//! stored. [`DocumentPolicy::DigitsOnly`] keeps that behavior and logs every
//! such document at `warn`; [`DocumentPolicy::Checksum`] rejects them.
//! Which one applies is the integrating service's decision.

use serde::{Deserialize, Serialize};

use crate::digits::normalize;
use crate::document::DocumentType;
use crate::error::{CadastroError, RegistrationError};

/// How strictly the registration document is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentPolicy {
    /// Strip non-digits and store; checksum failures are only logged.
    #[default]
    DigitsOnly,
    /// Reject documents that fail checksum validation.
    Checksum,
}

impl DocumentPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DigitsOnly => "digits_only",
            Self::Checksum => "checksum",
        }
    }
}

impl std::fmt::Display for DocumentPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DocumentPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "digits_only" => Ok(Self::DigitsOnly),
            "checksum" => Ok(Self::Checksum),
            other => Err(format!("unknown document policy: {other:?}")),
        }
    }
}

/// Registration payload as submitted by the form.
///
/// Every field defaults when absent so that [`validate`](Self::validate),
/// not deserialization, reports what is missing.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationRequest {
    pub email: String,
    pub senha: String,
    pub nome: String,
    pub documento: Option<String>,
    pub documento_tipo: Option<DocumentType>,
    #[serde(rename = "tipoEmpresa")]
    pub tipo_empresa: Option<String>,
    #[serde(rename = "razaoSocial")]
    pub razao_social: Option<String>,
    #[serde(rename = "nomeFantasia")]
    pub nome_fantasia: Option<String>,
    pub whatsapp: Option<String>,
}

impl std::fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("email", &self.email)
            .field("senha", &"[REDACTED]")
            .field("nome", &self.nome)
            .field("documento", &self.documento)
            .field("documento_tipo", &self.documento_tipo)
            .field("tipo_empresa", &self.tipo_empresa)
            .field("razao_social", &self.razao_social)
            .field("nome_fantasia", &self.nome_fantasia)
            .field("whatsapp", &self.whatsapp)
            .finish()
    }
}

/// A document after normalization. Under [`DocumentPolicy::DigitsOnly`]
/// the digits may still fail the checksum; `checksum_valid` records it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedDocument {
    pub kind: DocumentType,
    pub digits: String,
    pub checksum_valid: bool,
}

/// A registration ready for storage. The password is carried for hashing
/// but never serialized or debug-printed.
#[derive(Clone, Serialize)]
pub struct ValidatedRegistration {
    pub email: String,
    #[serde(skip_serializing)]
    password: String,
    pub nome: String,
    pub documento: Option<ValidatedDocument>,
    pub tipo_empresa: Option<String>,
    pub razao_social: Option<String>,
    pub nome_fantasia: String,
    pub whatsapp: Option<String>,
}

impl ValidatedRegistration {
    /// Plain-text password, for the caller's hashing step.
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for ValidatedRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatedRegistration")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("nome", &self.nome)
            .field("documento", &self.documento)
            .field("tipo_empresa", &self.tipo_empresa)
            .field("razao_social", &self.razao_social)
            .field("nome_fantasia", &self.nome_fantasia)
            .field("whatsapp", &self.whatsapp)
            .finish()
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl RegistrationRequest {
    /// Parse a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`CadastroError::Serialization`] for malformed JSON or
    /// an unknown `documento_tipo`.
    pub fn from_json(payload: &str) -> Result<Self, CadastroError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Check required fields and normalize the payload.
    ///
    /// # Errors
    ///
    /// - [`RegistrationError::MissingFields`] listing every blank required
    ///   field (`email`, `senha`, `nome`)
    /// - [`RegistrationError::InvalidDocument`] under
    ///   [`DocumentPolicy::Checksum`] when the document fails validation
    pub fn validate(
        &self,
        policy: DocumentPolicy,
    ) -> Result<ValidatedRegistration, RegistrationError> {
        let missing: Vec<&'static str> = [
            ("email", &self.email),
            ("senha", &self.senha),
            ("nome", &self.nome),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();
        if !missing.is_empty() {
            return Err(RegistrationError::MissingFields(missing));
        }

        let kind = self.documento_tipo.unwrap_or_default();
        let documento = self
            .documento
            .as_deref()
            .map(normalize)
            .filter(|digits| !digits.is_empty())
            .map(|digits| Self::check_document(digits, kind, policy))
            .transpose()?;

        let nome = self.nome.trim().to_string();
        let razao_social = match kind {
            DocumentType::Cpf => None,
            DocumentType::Cnpj => non_blank(self.razao_social.as_deref()),
        };
        let nome_fantasia =
            non_blank(self.nome_fantasia.as_deref()).unwrap_or_else(|| nome.clone());
        let whatsapp = self
            .whatsapp
            .as_deref()
            .map(normalize)
            .filter(|digits| !digits.is_empty());

        tracing::info!(
            email = %self.email.trim(),
            documento_tipo = %kind,
            has_documento = documento.is_some(),
            "registration payload accepted"
        );

        Ok(ValidatedRegistration {
            email: self.email.trim().to_string(),
            password: self.senha.clone(),
            nome,
            documento,
            tipo_empresa: non_blank(self.tipo_empresa.as_deref()),
            razao_social,
            nome_fantasia,
            whatsapp,
        })
    }

    fn check_document(
        digits: String,
        kind: DocumentType,
        policy: DocumentPolicy,
    ) -> Result<ValidatedDocument, RegistrationError> {
        let checked = kind.check(&digits);
        match (policy, checked) {
            (_, Ok(())) => Ok(ValidatedDocument {
                kind,
                digits,
                checksum_valid: true,
            }),
            (DocumentPolicy::Checksum, Err(e)) => Err(e.into()),
            (DocumentPolicy::DigitsOnly, Err(e)) => {
                tracing::warn!(
                    documento_tipo = %kind,
                    reason = %e,
                    "storing document that fails checksum validation"
                );
                Ok(ValidatedDocument {
                    kind,
                    digits,
                    checksum_valid: false,
                })
            }
        }
    }
}
