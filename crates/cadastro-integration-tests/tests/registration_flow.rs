//! End-to-end registration checks: JSON payload on disk, YAML config, and
//! the CLI handlers that tie them together.

use std::io::Write;

use cadastro_cli::config::CliConfig;
use cadastro_cli::register::{check_registration, RegisterArgs};
use cadastro_cli::validate::{validate_report, ValidateArgs};
use cadastro_core::{
    assess, DocumentPolicy, DocumentType, RegistrationError, RegistrationRequest, ValidationStatus,
};

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn form_payload(documento: &str, tipo: &str) -> String {
    serde_json::json!({
        "email": "contato@empresa.com.br",
        "senha": "segredo123",
        "nome": "João Lima",
        "documento": documento,
        "documento_tipo": tipo,
        "tipoEmpresa": "Padaria",
        "razaoSocial": "Lima Pães LTDA",
        "nomeFantasia": "",
        "whatsapp": "(21) 9 9876-5432"
    })
    .to_string()
}

#[test]
fn strict_config_rejects_invalid_cnpj() {
    let config_file = write_temp("document_policy: checksum\n");
    let config = CliConfig::load(Some(config_file.path())).unwrap();
    let payload = write_temp(&form_payload("11.222.333/0001-80", "cnpj"));

    let verdict = check_registration(
        &RegisterArgs {
            path: payload.path().to_path_buf(),
            policy: None,
        },
        &config,
    )
    .unwrap();
    assert!(matches!(verdict, Err(RegistrationError::InvalidDocument(_))));
}

#[test]
fn default_config_stores_unverified_cnpj() {
    let payload = write_temp(&form_payload("11.222.333/0001-80", "cnpj"));
    let reg = check_registration(
        &RegisterArgs {
            path: payload.path().to_path_buf(),
            policy: None,
        },
        &CliConfig::default(),
    )
    .unwrap()
    .unwrap();

    let doc = reg.documento.unwrap();
    assert_eq!(doc.digits, "11222333000180");
    assert!(!doc.checksum_valid);
    assert_eq!(reg.nome_fantasia, "João Lima");
    assert_eq!(reg.whatsapp.as_deref(), Some("21998765432"));
}

#[test]
fn cpf_payload_clears_razao_social() {
    let request = RegistrationRequest::from_json(&form_payload("529.982.247-25", "cpf")).unwrap();
    let reg = request.validate(DocumentPolicy::Checksum).unwrap();
    assert!(reg.razao_social.is_none());
    let json = serde_json::to_value(&reg).unwrap();
    assert_eq!(json["documento"]["digits"], "52998224725");
    assert!(json.get("password").is_none());
}

#[test]
fn field_feedback_matches_cli_validation() {
    let config = CliConfig::default();
    for input in ["", "11.222.333/0001-81", "11.222.333/0001-80", "11.222"] {
        let status = assess(input, DocumentType::Cnpj);
        if status == ValidationStatus::Pending {
            continue;
        }
        let report = validate_report(
            &ValidateArgs {
                document: input.to_string(),
                kind: None,
            },
            &config,
        );
        assert_eq!(status.is_valid(), report.valid, "{input}");
    }
}
