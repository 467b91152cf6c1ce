use std::io;
use std::path::PathBuf;

use ragebeam_fetch::{BarTrackerBuilder, ClientSetting, LineTrackerBuilder, Portal};

use crate::cli::app::{App, ProgressMode};
use crate::error::CliError;

pub mod app;
pub mod menu;

/// Log in, list the installers, ask for one and download it.
pub async fn run(app: App) -> Result<PathBuf, CliError> {
    let (os, destination) = app.target()?;
    if !destination.is_dir() {
        return Err(CliError::Destination(destination));
    }

    let client = ClientSetting::default()
        .with_proxies(app.proxies.clone())
        .build()?;
    let portal = Portal::new(app.portal_config(), client);

    let session = portal.login(&app.credentials).await?;
    let catalog = portal.catalog(&session).await?;
    let links = match os {
        Some(os) => catalog.for_os(os).ok_or(CliError::NoInstallers(os))?,
        None => catalog.into_links(),
    };

    let link = menu::prompt(&links, io::stdin().lock(), io::stdout())?;

    let path = match app.progress {
        ProgressMode::Line => {
            portal
                .download_with(&session, link, &destination, LineTrackerBuilder::stdout())
                .await?
        }
        ProgressMode::Bar => {
            let bar = BarTrackerBuilder::default()
                .with_prefix("Downloading")
                .with_finish("done");
            portal
                .download_with(&session, link, &destination, bar)
                .await?
        }
        ProgressMode::Quiet => portal.download(&session, link, &destination).await?,
    };
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::tempdir;

    use crate::error::{EXIT_AUTH, EXIT_INPUT};

    #[tokio::test]
    async fn test_missing_destination_fails_before_login() {
        let app = App::try_parse_from([
            "ragebeam",
            "--login-url",
            "http://127.0.0.1:1/login",
            "alice:pw",
            "/definitely/not/a/folder",
        ])
        .unwrap();

        let err = run(app).await.unwrap_err();
        assert!(matches!(err, CliError::Destination(_)));
        assert_eq!(err.exit_code(), EXIT_INPUT);
    }

    #[tokio::test]
    async fn test_unreachable_login_is_auth_failure() {
        let dest = tempdir().unwrap();
        let app = App::try_parse_from([
            "ragebeam",
            "--login-url",
            "http://127.0.0.1:1/login",
            "alice:pw",
            "linux",
            dest.path().to_str().unwrap(),
        ])
        .unwrap();

        let err = run(app).await.unwrap_err();
        assert_eq!(err.exit_code(), EXIT_AUTH);
        assert_eq!(std::fs::read_dir(dest.path()).unwrap().count(), 0);
    }
}
