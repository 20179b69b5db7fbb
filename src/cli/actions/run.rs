use super::Action;

/// Execute the action's business logic by delegating to the appropriate module
pub async fn execute(action: Action) -> anyhow::Result<()> {
    match action {
        Action::Serve {
            listen,
            port,
            mysql,
            postgres,
        } => crate::server::start(listen, port, mysql, postgres).await,
    }
}
