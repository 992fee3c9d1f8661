//! Built-in sample deck standing in for a real data source.

use super::{Fundamentals, NewsItem, QuickTag, Sentiment, StockCatalog, StockRecord};

fn news(source: &str, title: &str, summary: &str) -> NewsItem {
    NewsItem {
        title: title.to_string(),
        summary: summary.to_string(),
        source: source.to_string(),
    }
}

/// The fixed mock deck used by the demo, the HTTP projections, and tests.
pub fn sample_catalog() -> StockCatalog {
    StockCatalog::new(vec![
        StockRecord {
            ticker: "NVDR".to_string(),
            name: "Nimbus Data Systems".to_string(),
            price: 412.36,
            daily_change: 2.4,
            market_cap: "$86B".to_string(),
            sector: "Technology".to_string(),
            tags: vec![QuickTag::Growth, QuickTag::Tech, QuickTag::Ai],
            fundamentals: Fundamentals {
                pe: 38.0,
                eps: 10.85,
                beta: 1.6,
                revenue_yoy: 46.0,
                ps: Some(14.2),
                roe: Some(28.0),
                margin: Some(32.0),
            },
            sentiment: Sentiment::Bullish,
            earnings_date: "Nov 12".to_string(),
            description: "Accelerated-compute infrastructure for model training clusters."
                .to_string(),
            news: vec![
                news(
                    "WireDesk",
                    "Nimbus lands hyperscaler renewal",
                    "Three-year capacity deal extends its largest contract.",
                ),
                news(
                    "MarketPulse",
                    "Supply constraints easing",
                    "Packaging bottlenecks clear ahead of the holiday quarter.",
                ),
            ],
        },
        StockRecord {
            ticker: "QBIT".to_string(),
            name: "Qubitron Labs".to_string(),
            price: 97.14,
            daily_change: -1.2,
            market_cap: "$12B".to_string(),
            sector: "Technology".to_string(),
            tags: vec![QuickTag::Growth, QuickTag::Tech, QuickTag::SmallCap],
            fundamentals: Fundamentals {
                pe: 62.0,
                eps: 1.57,
                beta: 2.1,
                revenue_yoy: 38.0,
                ps: Some(19.8),
                roe: Some(12.0),
                margin: Some(18.0),
            },
            sentiment: Sentiment::Neutral,
            earnings_date: "Dec 3".to_string(),
            description: "Error-corrected qubit hardware sold as a cloud service.".to_string(),
            news: vec![news(
                "TechLedger",
                "Qubitron posts record logical-qubit count",
                "Benchmark run doubles the previous public record.",
            )],
        },
        StockRecord {
            ticker: "SOLR".to_string(),
            name: "SolarPeak Energy".to_string(),
            price: 64.02,
            daily_change: 0.8,
            market_cap: "$21B".to_string(),
            sector: "Energy".to_string(),
            tags: vec![QuickTag::Growth, QuickTag::Energy],
            fundamentals: Fundamentals {
                pe: 18.0,
                eps: 3.56,
                beta: 1.1,
                revenue_yoy: 22.0,
                ps: Some(3.4),
                roe: Some(14.0),
                margin: Some(12.0),
            },
            sentiment: Sentiment::Bullish,
            earnings_date: "Nov 20".to_string(),
            description: "Utility-scale solar farms with fixed-price offtake agreements."
                .to_string(),
            news: vec![news(
                "GridWeekly",
                "SolarPeak wins desert interconnect",
                "1.2GW project clears its final permitting hurdle.",
            )],
        },
        StockRecord {
            ticker: "BARL".to_string(),
            name: "Barrel & Flame Oil".to_string(),
            price: 41.77,
            daily_change: -0.4,
            market_cap: "$34B".to_string(),
            sector: "Energy".to_string(),
            tags: vec![QuickTag::Value, QuickTag::Dividend, QuickTag::Energy],
            fundamentals: Fundamentals {
                pe: 9.0,
                eps: 4.64,
                beta: 0.9,
                revenue_yoy: 4.0,
                ps: Some(1.1),
                roe: Some(18.0),
                margin: Some(22.0),
            },
            sentiment: Sentiment::Bearish,
            earnings_date: "Nov 6".to_string(),
            description: "Integrated upstream producer returning cash through buybacks."
                .to_string(),
            news: vec![
                news(
                    "CrudeBrief",
                    "Barrel & Flame trims capex",
                    "Guidance cut follows a soft spot-price quarter.",
                ),
                news(
                    "DividendDaily",
                    "Payout held steady",
                    "Board keeps the quarterly dividend unchanged.",
                ),
            ],
        },
        StockRecord {
            ticker: "FINX".to_string(),
            name: "Finexa Bancorp".to_string(),
            price: 58.90,
            daily_change: 0.5,
            market_cap: "$45B".to_string(),
            sector: "Banking".to_string(),
            tags: vec![QuickTag::Dividend, QuickTag::Banking, QuickTag::LargeCap],
            fundamentals: Fundamentals {
                pe: 11.0,
                eps: 5.35,
                beta: 1.0,
                revenue_yoy: 8.0,
                ps: Some(2.6),
                roe: Some(15.0),
                margin: Some(30.0),
            },
            sentiment: Sentiment::Neutral,
            earnings_date: "Oct 28".to_string(),
            description: "Regional lender expanding its treasury-services franchise.".to_string(),
            news: vec![news(
                "BankBeat",
                "Finexa net interest margin widens",
                "Deposit repricing lags the latest rate move.",
            )],
        },
        StockRecord {
            ticker: "VLTM".to_string(),
            name: "Vault & Main Financial".to_string(),
            price: 33.18,
            daily_change: -0.2,
            market_cap: "$18B".to_string(),
            sector: "Banking".to_string(),
            tags: vec![QuickTag::Value, QuickTag::Banking],
            fundamentals: Fundamentals {
                pe: 8.0,
                eps: 4.15,
                beta: 0.8,
                revenue_yoy: 3.0,
                ps: Some(1.9),
                roe: Some(11.0),
                margin: Some(28.0),
            },
            sentiment: Sentiment::Neutral,
            earnings_date: "Nov 1".to_string(),
            description: "Community banking group with a conservative loan book.".to_string(),
            news: vec![news(
                "BankBeat",
                "Vault & Main closes branch deal",
                "Acquisition adds twelve locations across two states.",
            )],
        },
        StockRecord {
            ticker: "GENM".to_string(),
            name: "Genomiq Therapeutics".to_string(),
            price: 122.45,
            daily_change: 1.1,
            market_cap: "$29B".to_string(),
            sector: "Healthcare".to_string(),
            tags: vec![QuickTag::Growth, QuickTag::LargeCap],
            fundamentals: Fundamentals {
                pe: 24.0,
                eps: 5.10,
                beta: 1.3,
                revenue_yoy: 18.0,
                ps: Some(7.5),
                roe: Some(9.0),
                margin: Some(14.0),
            },
            sentiment: Sentiment::Bullish,
            earnings_date: "Dec 9".to_string(),
            description: "Gene-silencing platform with two approved rare-disease drugs."
                .to_string(),
            news: vec![news(
                "BioWire",
                "Genomiq phase 3 readout positive",
                "Primary endpoint met with a clean safety profile.",
            )],
        },
        StockRecord {
            ticker: "CRXM".to_string(),
            name: "Corex Medical".to_string(),
            price: 76.33,
            daily_change: 0.3,
            market_cap: "$15B".to_string(),
            sector: "Healthcare".to_string(),
            tags: vec![QuickTag::Value, QuickTag::Dividend],
            fundamentals: Fundamentals {
                pe: 15.0,
                eps: 5.09,
                beta: 0.7,
                revenue_yoy: 7.0,
                ps: Some(3.1),
                roe: Some(13.0),
                margin: Some(19.0),
            },
            sentiment: Sentiment::Neutral,
            earnings_date: "Nov 18".to_string(),
            description: "Surgical consumables with recurring hospital contracts.".to_string(),
            news: vec![news(
                "MedSupply Monitor",
                "Corex expands sterile plant",
                "New line lifts capacity roughly thirty percent.",
            )],
        },
        StockRecord {
            ticker: "SNCK".to_string(),
            name: "Snackwell Brands".to_string(),
            price: 54.61,
            daily_change: 0.1,
            market_cap: "$23B".to_string(),
            sector: "Consumer".to_string(),
            tags: vec![QuickTag::Dividend, QuickTag::Value, QuickTag::LargeCap],
            fundamentals: Fundamentals {
                pe: 21.0,
                eps: 2.60,
                beta: 0.6,
                revenue_yoy: 6.0,
                ps: Some(2.2),
                roe: Some(17.0),
                margin: Some(11.0),
            },
            sentiment: Sentiment::Neutral,
            earnings_date: "Oct 30".to_string(),
            description: "Shelf-stable snacking portfolio with steady pricing power.".to_string(),
            news: vec![news(
                "ConsumerDesk",
                "Snackwell reformulates flagship line",
                "Cost-down recipe protects gross margin targets.",
            )],
        },
        StockRecord {
            ticker: "LOOP".to_string(),
            name: "LoopWear".to_string(),
            price: 18.92,
            daily_change: 3.2,
            market_cap: "$4B".to_string(),
            sector: "Consumer".to_string(),
            tags: vec![QuickTag::Growth, QuickTag::SmallCap],
            fundamentals: Fundamentals {
                pe: 44.0,
                eps: 0.43,
                beta: 1.8,
                revenue_yoy: 31.0,
                ps: Some(4.8),
                roe: Some(5.0),
                margin: Some(4.0),
            },
            sentiment: Sentiment::Bullish,
            earnings_date: "Dec 15".to_string(),
            description: "Direct-to-consumer recycled apparel with a subscription tier."
                .to_string(),
            news: vec![news(
                "RetailScan",
                "LoopWear subscriber base tops one million",
                "Churn fell for the third straight quarter.",
            )],
        },
    ])
}
