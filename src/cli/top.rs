use tabled::Table;

use crate::{
    cli::auth::login,
    config, error,
    error::FetchError,
    spotify::{FetchPlan, MAX_PAGE_SIZE, RangeOutcome, Schedule, TopItemsClient, aggregate_all},
    success,
    types::{Category, RankedItem, TimeRange},
    utils, warning,
};

/// Options shared by `spotop tracks` and `spotop artists`.
#[derive(Debug, Clone)]
pub struct TopOptions {
    pub range: TimeRange,
    pub limit: u32,
    pub all_ranges: bool,
    pub sequential: bool,
}

/// Logs in, fetches the ranked list(s) and prints them.
pub async fn top(category: Category, opts: TopOptions) {
    let plan = match FetchPlan::new(MAX_PAGE_SIZE, opts.limit) {
        Ok(plan) => plan,
        Err(e) => error!("{}", e),
    };

    let session = match login().await {
        Ok(session) => session,
        Err(e) => error!("{}", e),
    };
    success!("Authentication successful!");

    let client = TopItemsClient::new(config::spotify_apiurl(), session);

    let ranges: Vec<TimeRange> = if opts.all_ranges {
        TimeRange::ALL.to_vec()
    } else {
        vec![opts.range]
    };
    let schedule = if opts.sequential {
        Schedule::Sequential
    } else {
        Schedule::Concurrent
    };

    let pb = utils::spinner(format!("Fetching top {}...", category));
    let outcomes = aggregate_all(&client, category, &ranges, plan, schedule).await;
    pb.finish_and_clear();

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    for outcome in outcomes {
        print_outcome(category, outcome, opts.all_ranges);
    }

    if failed == ranges.len() {
        error!("Failed to load top {}. Please try again.", category);
    }
}

fn print_outcome(category: Category, outcome: RangeOutcome, with_title: bool) {
    if with_title {
        println!("\n{}", outcome.range.label());
    }

    match outcome.result {
        Ok(items) => print_items(category, &items),
        Err(e) => print_failure(category, outcome.range, &e),
    }
}

fn print_items(category: Category, items: &[RankedItem]) {
    if items.is_empty() {
        warning!("No top {} for this range yet.", category);
        return;
    }

    let table = match category {
        Category::Tracks => Table::new(utils::track_rows(items)),
        Category::Artists => Table::new(utils::artist_rows(items)),
    };
    println!("{}", table);
}

fn print_failure(category: Category, range: TimeRange, e: &FetchError) {
    warning!("Failed to load top {} ({}): {}", category, range.label(), e);
    if e.is_token_rejected() {
        warning!("The access token is no longer valid. Run the command again to log in.");
    }
}
