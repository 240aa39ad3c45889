use aws_prefix_list_summary::config;
use aws_prefix_list_summary::get_prefix_lists;
use aws_prefix_list_summary::output::print_prefix_lists;
use aws_prefix_list_summary::{select_prefix_lists, LogObserver};
use log4rs;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let cache_file = config::cache_file_from_env();
    let data = get_prefix_lists(cache_file.as_deref())
        .expect("Error reading prefix lists from cache or aws cli");

    let criteria = config::criteria_from_env();
    let selected = select_prefix_lists(&data.prefix_lists, &criteria, &LogObserver);

    print_prefix_lists(&selected).await?;

    Ok(())
}
