use indicatif::MultiProgress;
use lookout::config::{Config, CONFIG_PATH};
use lookout::dashboard::start_dashboard;
use lookout::program_version;
use lookout::status::server::StatusServer;

#[tokio::main]
async fn main() {

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|x| x == "-v")
    {
        println!("Version: {}", program_version());
        std::process::exit(0);
    }

    if args.iter().any(|x| x == "-d")
    {
        lookout::set_debug(true);
    }

    if args.iter().any(|x| x == "-t")
    {
        lookout::set_debug_timestamp(true);
    }

    let config = Config::load_or_default(CONFIG_PATH);

    if args.iter().any(|x| x == "--serve")
    {
        let server = StatusServer::new(0,0,0,0, config.status_port);
        println!("Serving mock status on {}", server.get_addr());
        match server.serve().await
        {
            Ok(()) => (),
            Err(e) =>
            {
                println!("error serving status on port {}\n{}", config.status_port, e);
                std::process::exit(1);
            }
        }
        return
    }

    let multi = MultiProgress::new();
    let (pool, views) = start_dashboard(&config, &multi);

    if pool.npollers() == 0
    {
        println!("No panels could be started, check {}", CONFIG_PATH);
        std::process::exit(1);
    }

    match tokio::signal::ctrl_c().await
    {
        Ok(()) => (),
        Err(e) => println!("error waiting for Ctrl-C\n{}", e)
    }

    pool.dispose_all();

    for view in views
    {
        view.finish();
    }
}
