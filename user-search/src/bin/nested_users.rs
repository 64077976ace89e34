//! Index three tagged users into the `user` collection and list those owned by `ch1`.

use std::io;
use std::process;

use dotenv::dotenv;
use user_search::{execute, report_failure, scenarios, telemetry};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv().ok();
    telemetry::init_tracing();

    let scenario = scenarios::nested_users();
    if let Err(e) = execute(&scenario, &mut io::stdout().lock()).await {
        let _ = report_failure(&e, &mut io::stderr().lock());
        process::exit(1);
    }
}
