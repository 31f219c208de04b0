use std::io;

use qsms::{Credentials, GetTemplates, ProviderReply, QsmsClient, TemplateId};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let app_id = std::env::var("QSMS_APP_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "QSMS_APP_ID environment variable is required",
        )
    })?;
    let app_key = std::env::var("QSMS_APP_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "QSMS_APP_KEY environment variable is required",
        )
    })?;
    let ids = std::env::var("QSMS_TEMPLATE_IDS")
        .unwrap_or_default()
        .split(',')
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| raw.trim().parse::<u64>().map(TemplateId::new))
        .collect::<Result<Vec<_>, _>>()?;

    let client = QsmsClient::new(Credentials::new(app_id, app_key)?);
    let response = client
        .get_templates(GetTemplates::new(ids)?)
        .await?
        .ensure_success()?;

    for template in response.data {
        println!(
            "{}: status={:?} kind={:?} text={:?}",
            template.id.value(),
            template.status,
            template.kind,
            template.text
        );
    }

    Ok(())
}
