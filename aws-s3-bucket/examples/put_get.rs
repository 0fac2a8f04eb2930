/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
use std::error::Error;

use aws_s3_bucket::config::Region;
use aws_s3_bucket::{Bucket, Config};
use aws_sdk_s3::error::DisplayErrorContext;
use clap::Parser;

type BoxError = Box<dyn Error + Send + Sync>;

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "put_get")]
#[command(about = "Stores a value in an S3 bucket and reads it back.")]
pub struct Args {
    /// Bucket to store the value in
    #[arg(required = true)]
    bucket: String,

    /// Key to store the value under
    #[arg(long, default_value = "json_data_1")]
    key: String,

    /// Value to store
    #[arg(long, default_value = r#"{"a": 1, "b": 2}"#)]
    value: String,

    /// Access key id. Resolved from the default credentials chain when unset
    #[arg(long, env = "AWS_ACCESS_KEY_ID", requires = "secret_access_key")]
    access_key_id: Option<String>,

    /// Secret access key
    #[arg(long, env = "AWS_SECRET_ACCESS_KEY", hide_env_values = true)]
    secret_access_key: Option<String>,

    /// Region override
    #[arg(long)]
    region: Option<String>,

    /// Custom endpoint for S3 compatible services (implies path-style addressing)
    #[arg(long)]
    endpoint_url: Option<String>,
}

async fn load_config(args: &Args) -> Result<Config, BoxError> {
    let mut loader = aws_s3_bucket::from_env();
    if let (Some(akid), Some(secret)) = (&args.access_key_id, &args.secret_access_key) {
        loader = loader.access_keys(akid, secret);
    }
    if let Some(region) = &args.region {
        loader = loader.region(Region::new(region.clone()));
    }
    if let Some(endpoint_url) = &args.endpoint_url {
        loader = loader.endpoint_url(endpoint_url).force_path_style(true);
    }
    Ok(loader.load().await?)
}

async fn put_get(args: Args) -> Result<(), BoxError> {
    let config = load_config(&args).await?;
    let bucket = Bucket::new(&config, &args.bucket)?;

    let ack = bucket.put(&args.key, args.value.clone()).await?;
    tracing::info!(e_tag = ?ack.e_tag(), "stored {}/{}", bucket.name(), args.key);

    let (data, metadata) = bucket.get(&args.key).await?;
    println!("{}", String::from_utf8_lossy(&data));
    tracing::info!(?metadata, "read back {} bytes", data.len());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_thread_ids(true)
        .init();

    if let Err(ref err) = put_get(args).await {
        tracing::error!("put/get failed: {}", DisplayErrorContext(err.as_ref()));
    }

    Ok(())
}
