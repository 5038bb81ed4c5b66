pub struct Config {
    pub listing_url: String,
    pub quote_base_url: String,
    pub site_base_url: String,
    pub exchange_code: String,
    pub currency: String,
    pub output_dir: String,
}

impl Config {
    pub fn new() -> Self {
        Self {
            listing_url: "https://www.netfonds.no/quotes/kurs.php?exchange=OSE".to_string(),
            quote_base_url: "https://www.netfonds.no/quotes/".to_string(),
            site_base_url: "https://www.netfonds.no/".to_string(),
            exchange_code: "OSE".to_string(),
            currency: "NOK".to_string(),
            output_dir: ".".to_string(),
        }
    }

    pub fn with_output_dir(mut self, dir: &str) -> Self {
        self.output_dir = dir.to_string();
        self
    }

    pub fn with_listing_url(mut self, url: &str) -> Self {
        self.listing_url = url.to_string();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
