use std::{net::IpAddr, sync::Arc};

use axum::Router;
use clenica_core_contact_contracts::ContactService;
use tokio::net::TcpListener;

mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Contact> {
    contact: Contact,
}

impl<Contact> RestServer<Contact>
where
    Contact: ContactService,
{
    pub fn new(contact: Contact) -> Self {
        Self { contact }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        axum::serve(listener, router).await.map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let contact = Arc::new(self.contact);
        let router = Router::new()
            .merge(routes::health::router(Arc::clone(&contact)))
            .merge(routes::contact::router(contact));
        middlewares::add(router)
    }
}
