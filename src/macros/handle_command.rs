/// Runs a command body inside a `command` span and logs any error it returns.
#[macro_export]
macro_rules! handle_command {
    ($name:literal, $body:block) => {{
        use tracing::Instrument;
        async move {
            if let Err(e) = async {
                $body
                Ok::<_, anyhow::Error>(())
            }
            .await
            {
                tracing::error!(error = %e, "error handling {}", $name);
            }
        }
        .instrument(tracing::info_span!("command", name = $name))
        .await;
    }};
}
