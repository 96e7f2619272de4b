// src/main.rs

use std::any::Any;
use std::backtrace::Backtrace;
use std::panic::{self, AssertUnwindSafe};

use sd_cmd::{cli, logging};

fn main() {
    // Last-resort recovery: a panic anywhere below lands here, after the
    // async runtime has been torn down, and still exits with code 1.
    let exit = match panic::catch_unwind(AssertUnwindSafe(run)) {
        Ok(code) => code,
        Err(payload) => {
            eprintln!("ERROR: something terrible has happened, please file a ticket with this info:");
            eprintln!(
                "ERROR: {}\n{}",
                panic_message(payload.as_ref()),
                Backtrace::force_capture()
            );
            1
        }
    };
    std::process::exit(exit);
}

fn run() -> i32 {
    let args = cli::parse();

    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("ERROR: {err}");
        return 1;
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(err) => {
            eprintln!("ERROR: failed to start async runtime: {err}");
            return 1;
        }
    };

    match runtime.block_on(sd_cmd::run(args)) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("ERROR: {err}");
            err.exit_code()
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "non-string panic payload"
    }
}
