use std::io;

use qsms::{Credentials, QsmsClient, SignText, TemplateId};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

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
    let template_id: u64 = std::env::var("QSMS_TEMPLATE_ID")
        .map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "QSMS_TEMPLATE_ID environment variable is required",
            )
        })?
        .parse()?;
    let sign = std::env::var("QSMS_SIGN").unwrap_or_else(|_| "Acme".to_owned());
    let params = vec!["123456".to_owned()];

    let client = QsmsClient::new(Credentials::new(app_id, app_key)?);
    let sign = SignText::new(sign)?;

    // The second estimate is served from the template cache.
    for _ in 0..2 {
        let length = client
            .text_num(&sign, TemplateId::new(template_id), &params)
            .await?;
        println!("estimated length: {length}");
    }

    Ok(())
}
