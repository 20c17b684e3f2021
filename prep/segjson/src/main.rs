//! BraTS/ISLES 系列数据集的分割 manifest 生成器入口.

use std::process::ExitCode;

mod report;
mod runner;

fn main() -> ExitCode {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .unwrap();

    utils::sep();
    println!("BraTS/ISLES segmentation manifest generator");
    utils::sep();

    match runner::run() {
        Ok(report) => {
            println!("{report}");
            utils::sep();
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
