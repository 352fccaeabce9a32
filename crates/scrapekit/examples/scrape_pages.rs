//! Example: Scrape a few well-known pages and summarize what was found
//!
//! Run with: cargo run -p scrapekit --example scrape_pages

use scrapekit::{Scraper, StructureKind};

/// Page to scrape and what to expect from it
struct Case {
    url: &'static str,
    description: &'static str,
    expect_title: Option<&'static str>,
}

const CASES: &[Case] = &[
    Case {
        url: "https://example.com",
        description: "Simple HTML page",
        expect_title: Some("Example Domain"),
    },
    Case {
        url: "https://httpbin.org/html",
        description: "HTML without a title",
        expect_title: None,
    },
    Case {
        url: "https://www.rust-lang.org",
        description: "Site with navigation, lists and Open Graph tags",
        expect_title: Some("Rust"),
    },
];

#[tokio::main]
async fn main() {
    println!("ScrapeKit Examples");
    println!("==================\n");

    let scraper = Scraper::default();
    let mut passed = 0;
    let mut failed = 0;

    for (i, case) in CASES.iter().enumerate() {
        println!("{}. {}", i + 1, case.description);
        println!("   URL: {}", case.url);

        let metadata = match scraper.scrape_metadata(case.url).await {
            Ok(metadata) => metadata,
            Err(e) => {
                println!("   Error: {}", e);
                println!("   ✗ FAIL\n");
                failed += 1;
                continue;
            }
        };
        println!("   Title: {:?}", metadata.title);
        if !metadata.og_title.is_empty() {
            println!("   OG title: {}", metadata.og_title);
        }

        if let Ok(links) = scraper.scrape_links(case.url).await {
            println!("   Links: {}", links.len());
        }
        if let Ok(headings) = scraper.scrape_structured(case.url, StructureKind::Headings).await {
            println!("   Headings: {}", headings.len());
        }
        if let Ok(text) = scraper.scrape_text(case.url, None).await {
            let preview = text.chars().take(100).collect::<String>().replace('\n', " ");
            println!("   Preview: {}", preview);
        }

        let title_ok = match case.expect_title {
            Some(expected) => metadata.title.contains(expected),
            None => metadata.title.is_empty(),
        };
        if title_ok {
            println!("   ✓ PASS\n");
            passed += 1;
        } else {
            println!("   ✗ FAIL (unexpected title)\n");
            failed += 1;
        }
    }

    println!("==================");
    println!("Results: {} passed, {} failed", passed, failed);

    if failed > 0 {
        std::process::exit(1);
    }
}
