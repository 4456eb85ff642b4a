pub mod reqwest_page_fetcher;

pub use reqwest_page_fetcher::ReqwestPageFetcher;
