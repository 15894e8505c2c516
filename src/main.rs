mod appsettings;

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use remindly_models::{recipients::render_recipients, reminder::DeliveryTarget};
use remindly_storage::{
    DefaultRecipientPreference, JsonFilePreferenceStore, http::HttpReminderStorage,
};
use remindly_ui::{EMPTY_LIST_HINT, EMPTY_LIST_TITLE, Filter, ReminderController};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    pretty_env_logger::init();

    let filter = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<Filter>()?,
        None => Filter::All,
    };

    let settings = appsettings::load().context("Could not load application settings")?;
    log::info!("Watching reminders at {}", settings.api.base_url);

    let storage = Arc::new(HttpReminderStorage::new(settings.api.base_url.clone()));
    let preferences = DefaultRecipientPreference::new(Arc::new(JsonFilePreferenceStore::new(
        settings.preferences.path.clone(),
    )));
    let mut controller = ReminderController::new(
        storage,
        preferences,
        settings.api.user_id.clone(),
        settings.timezone,
    );
    controller.select_filter(filter);

    let shutdown = CancellationToken::new();
    let ctrl_c = shutdown.clone();
    tokio::spawn(async move {
        if let Err(error) = tokio::signal::ctrl_c().await {
            log::error!("Could not listen for Ctrl-C: {error}");
        }
        ctrl_c.cancel();
    });

    let interval = Duration::from_secs(settings.refresh_interval_secs.max(1));
    watch_reminders(&mut controller, interval, shutdown).await;

    Ok(())
}

async fn watch_reminders(
    controller: &mut ReminderController,
    interval: Duration,
    shutdown: CancellationToken,
) {
    loop {
        let refreshed = tokio::select! {
            _ = shutdown.cancelled() => false,
            _ = controller.refresh() => true,
        };
        if !refreshed {
            break;
        }
        print_reminders(controller);

        tokio::select! {
            _ = shutdown.cancelled() => break,
            _ = tokio::time::sleep(interval) => {}
        }
    }

    log::info!("Stopped watching reminders.");
}

fn print_reminders(controller: &ReminderController) {
    let views = controller.views();
    if views.is_empty() {
        println!("{EMPTY_LIST_TITLE}. {EMPTY_LIST_HINT}");
        return;
    }

    for view in views {
        let to = match &view.target {
            DeliveryTarget::Email(recipients) => render_recipients(recipients),
            DeliveryTarget::Sms(phone) => phone.clone(),
        };
        println!(
            "{} | {} | {} to {} | {}: {}",
            view.scheduled_at,
            view.reminder.title,
            view.reminder.channel,
            to,
            view.status.label(),
            view.status.description()
        );
    }
    println!();
}
