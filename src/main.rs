use doc_converter::action::cli::process_args;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if let Err(e) = process_args(args) {
        log::error!("程式執行失敗：{}", e);
        eprintln!("錯誤：{}", e);
        std::process::exit(1);
    }
    log::info!("程式執行完成");
}
