use std::sync::Arc;

use clenica_api_rest::RestServer;
use clenica_config::Config;
use clenica_core_contact_contracts::ContactService;
use clenica_core_contact_impl::{ContactServiceConfig, ContactServiceImpl};
use tracing::{info, warn};

use crate::mail;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let email = mail::client(&config.mail)?;

    let contact = ContactServiceImpl::new(
        email,
        ContactServiceConfig {
            forward_to: config.mail.forward_to.as_deref().map(Arc::from),
        },
    );

    if !contact.configured() {
        warn!("Mail settings are incomplete; contact submissions will be rejected");
    }

    let server = RestServer::new(contact);
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
