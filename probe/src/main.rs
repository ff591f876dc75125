use anyhow::Context;

// A failed probe propagates out of main: the error goes to stderr and the
// process exits non-zero.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    https_probe::logging::init();

    let descriptor =
        https_probe::config::descriptor_from_env().context("reading probe configuration")?;
    let mut stdout = std::io::stdout().lock();
    https_probe::run(descriptor, &mut stdout).await?;
    Ok(())
}
