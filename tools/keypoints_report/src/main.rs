use outreach_core::api::config::ApiConfig;
use outreach_core::api::routes::ApiRoute;
use outreach_core::api::session::bearer_header;
use outreach_core::impact::admin::{paginate, ITEMS_PER_PAGE};
use outreach_core::impact::source::{load_impacts, FileImpactSource};
use outreach_core::impact::summary::{ImpactHighlights, DEFAULT_HIGHLIGHT_LIMIT};
use serde_json::json;

const USAGE: &str = "usage: keypoints_report <summary|admin> <path/to/impacts.json> [page]\n       keypoints_report routes <impact_id>";

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    }

    let rendered = match args[1].as_str() {
        "summary" => {
            let source = FileImpactSource::new(&args[2]);
            // Same fallback the public site applies when the listing is unusable.
            let highlights =
                ImpactHighlights::from_listing(load_impacts(&source), DEFAULT_HIGHLIGHT_LIMIT);
            serde_json::to_string_pretty(&highlights)
        }
        "admin" => {
            let page = match args.get(3).map(|p| p.parse::<usize>()) {
                None => 1,
                Some(Ok(p)) => p,
                Some(Err(e)) => {
                    eprintln!("invalid page: {}", e);
                    std::process::exit(2);
                }
            };
            match load_impacts(&FileImpactSource::new(&args[2])) {
                Ok(impacts) => {
                    serde_json::to_string_pretty(&paginate(&impacts, page, ITEMS_PER_PAGE))
                }
                Err(e) => {
                    eprintln!("impact listing error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        "routes" => {
            let config = match ApiConfig::from_env() {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("config error: {}", e);
                    std::process::exit(1);
                }
            };
            let token = std::env::var("OUTREACH_API_TOKEN").ok();
            let authorized = bearer_header(token.as_deref()).is_some();
            let id = args[2].clone();
            let mut routes = Vec::new();
            for route in [
                ApiRoute::ListImpacts,
                ApiRoute::CreateImpact,
                ApiRoute::UpdateImpact(id.clone()),
                ApiRoute::DeleteImpact(id),
            ] {
                match config.url_for(&route) {
                    Ok(url) => routes.push(json!({
                        "method": route.method().as_str(),
                        "url": url.as_str(),
                        "sends_authorization": authorized
                    })),
                    Err(e) => {
                        eprintln!("route error: {}", e);
                        std::process::exit(1);
                    }
                }
            }
            serde_json::to_string_pretty(&json!({
                "base_url": config.base_url().as_str(),
                "routes": routes
            }))
        }
        other => {
            eprintln!("invalid mode: {}\n{}", other, USAGE);
            std::process::exit(2);
        }
    };

    match rendered {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("render error: {}", e);
            std::process::exit(1);
        }
    }
}
