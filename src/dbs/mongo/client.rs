use mongodb::{
    Client, Collection, Database,
    bson::doc,
    options::{ClientOptions, Credential, Tls, TlsOptions},
};
use std::time::Duration;

use crate::{
    configs::{APP_NAME, DATABASE, MESSAGES_COLLECTION, mongo::MONGO_CONFIGS},
    dbs::mongo::models::message::Message,
};

pub struct MongoDB {
    client: Client,
    database: Database,
    pub messages: Collection<Message>,
}

impl MongoDB {
    pub async fn init() -> anyhow::Result<Self> {
        let mut opts = ClientOptions::parse(&MONGO_CONFIGS.uri).await?;
        opts.app_name = Some(APP_NAME.to_string());

        let timeout = Duration::from_secs(MONGO_CONFIGS.connect_timeout_secs);
        opts.connect_timeout = Some(timeout);
        opts.server_selection_timeout = Some(timeout);

        if MONGO_CONFIGS.username.is_some() {
            opts.credential = Some(
                Credential::builder()
                    .username(MONGO_CONFIGS.username.clone())
                    .password(MONGO_CONFIGS.password.clone())
                    .source(MONGO_CONFIGS.auth_source.clone())
                    .build(),
            );
        }
        if MONGO_CONFIGS.ssl {
            let mut tls_opts = TlsOptions::default();
            if let Some(ref ca) = MONGO_CONFIGS.ca_file_path {
                tls_opts.ca_file_path = Some(ca.into());
            }
            if let Some(ref cert) = MONGO_CONFIGS.cert_key_file_path {
                tls_opts.cert_key_file_path = Some(cert.into());
            }
            if let Some(v) = MONGO_CONFIGS.allow_invalid_certificates {
                tls_opts.allow_invalid_certificates = Some(v);
            }
            opts.tls = Some(Tls::Enabled(tls_opts));
        }

        let client = Client::with_options(opts)?;

        // The driver connects lazily; ping so an unreachable server fails here
        // instead of at the first write.
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;

        let database = client.database(DATABASE);
        let messages = database.collection::<Message>(MESSAGES_COLLECTION);

        Ok(Self { client, database, messages })
    }

    pub async fn create_collection(&self, name: &str) -> anyhow::Result<()> {
        self.database.create_collection(name).await?;
        Ok(())
    }

    pub fn database_name(&self) -> &str {
        self.database.name()
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}
