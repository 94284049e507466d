#[macro_use]
extern crate log;

mod bank;
mod demo;
mod events;
mod helpers;
mod observers;
mod widgets;

use rust_decimal::Decimal;
use std::{
    error::Error,
    io,
    sync::{
        atomic::{AtomicU64, Ordering::SeqCst},
        Arc, Mutex, MutexGuard,
    },
    thread,
    time::Duration,
};

use bank::*;
use events::*;
use helpers::*;
use observers::*;
use widgets::*;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let console = real_console();
    let args: Vec<String> = std::env::args().collect();
    let conf = match build_config(&args, real_filesystem().as_ref(), console.as_ref()) {
        Ok(conf) => conf,
        Err(e) => {
            error!("configuration error: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    if conf.happy_exit {
        return;
    }
    info!("{:?}", conf);

    if let Err(e) = demo::run(&conf, console, real_filesystem(), real_key_source()) {
        error!("{}", e);
        eprintln!("fatal: {}", e);
        std::process::exit(1);
    }
}
