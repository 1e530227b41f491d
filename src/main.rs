#![allow(missing_docs)]

//! Courier demo binary.
//!
//! Runs a fixed demonstration sequence: the same notification service
//! carries messages over the email adapter, the SMS adapter (default
//! number, truncation, and destination override), and the dynamic adapter
//! (bound and unbound handler names). No arguments, no flags.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use courier::adapters::{
    AdapterError, DynamicAdapter, EmailAdapter, HandlerTable, SmsAdapter,
};
use courier::config::load_or_default;
use courier::legacy::{LegacyEmailService, LegacySmsGateway};
use courier::notify::NotificationService;

fn main() -> Result<()> {
    courier::logging::init();

    // Optional config.toml next to the binary; defaults otherwise.
    let config = load_or_default(Path::new("config.toml")).context("failed to load configuration")?;
    info!("courier demo starting");

    // Channel A: the legacy email routine takes one pre-formatted string.
    let email = NotificationService::new(Box::new(EmailAdapter::new(
        LegacyEmailService::new(),
        &config.channels.email,
    )));
    email.notify_user("Важное обновление", "Вышла новая версия приложения!");

    // Channel B: the legacy SMS gateway takes (number, text).
    let sms = NotificationService::new(Box::new(SmsAdapter::new(
        LegacySmsGateway::new(),
        &config.channels.sms,
    )));
    sms.notify_user("Сбой сервиса", "Обнаружен кратковременный сбой, сервис восстановлен.");

    // Over-limit body: the adapter cuts it to 160 characters.
    let incident = "Подробности инцидента будут опубликованы на странице статуса. ".repeat(4);
    sms.notify_user("Инцидент", &incident);

    // A header starting with + overrides the configured number.
    sms.notify_user("+79161234567", "Срочно: требуется подтверждение дежурного.");

    // Dynamic binding: the gateway's call shape is registered by name and
    // invoked through the same sender contract.
    let gateway = LegacySmsGateway::new();
    let mut table = HandlerTable::new();
    table.register("deliver", move |args: &[String]| {
        let number = args
            .first()
            .ok_or_else(|| AdapterError::InvocationFailed("missing destination".to_owned()))?;
        let text = args
            .get(1)
            .ok_or_else(|| AdapterError::InvocationFailed("missing text".to_owned()))?;
        gateway.deliver(number, text);
        Ok(())
    });
    let dynamic = NotificationService::new(Box::new(DynamicAdapter::new(
        table,
        "deliver",
        |header, body| vec![header.to_owned(), body.to_owned()],
    )));
    dynamic.notify_user("+79035557766", "Динамическая привязка обработчика работает.");

    // Unbound name: reported and dropped, the demo keeps going.
    let unbound = NotificationService::new(Box::new(DynamicAdapter::new(
        HandlerTable::new(),
        "transmit",
        |header, body| vec![header.to_owned(), body.to_owned()],
    )));
    unbound.notify_user("Проверка", "Этот обработчик не зарегистрирован.");

    info!("courier demo complete");
    Ok(())
}
