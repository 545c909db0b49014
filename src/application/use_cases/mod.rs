/// Use cases module containing application business logic orchestration
mod collect_sensu_alerts;
mod render_alert_list;

pub use collect_sensu_alerts::CollectSensuAlertsUseCase;
pub use render_alert_list::RenderAlertListUseCase;
