use rolling_block::logging;

#[test]
fn init_tolerates_an_existing_global_subscriber() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    logging::init("rolling_block=debug");
    logging::init("rolling_block=warn");
    tracing::debug!("still logging");
}
