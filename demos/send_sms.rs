use std::io;

use qsms::{Credentials, MobileNumber, QsmsClient, SendSmsSingle, SignText, TemplateId};
use tracing_subscriber::EnvFilter;

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let app_id = required_env("QSMS_APP_ID")?;
    let app_key = required_env("QSMS_APP_KEY")?;
    let mobile = required_env("QSMS_MOBILE")?;
    let sign = required_env("QSMS_SIGN")?;
    let template_id: u64 = required_env("QSMS_TEMPLATE_ID")?.parse()?;
    let params = std::env::var("QSMS_PARAMS")
        .map(|raw| raw.split(',').map(str::to_owned).collect::<Vec<_>>())
        .unwrap_or_default();

    let client = QsmsClient::new(Credentials::new(app_id, app_key)?);
    let request = SendSmsSingle::new(
        MobileNumber::new(mobile)?,
        SignText::new(sign)?,
        TemplateId::new(template_id),
        params,
    );

    let response = client.send_sms_single(request).await?;
    println!(
        "result: {}, errmsg: {:?}, fee: {}, sid: {}",
        response.result, response.errmsg, response.fee, response.sid
    );
    response.check()?;

    Ok(())
}
