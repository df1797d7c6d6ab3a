use std::fmt;

use serde::{Deserialize, Serialize};

/// Which deployment variant a request is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Production traffic.
    Blue,
    /// Pre-production/test traffic.
    Green,
}

impl Classification {
    /// Header value for this classification.
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Blue => "blue",
            Classification::Green => "green",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Leftmost dot-delimited label of `host`, or the whole string if there is no dot.
pub fn subdomain_label(host: &str) -> &str {
    // split() always yields at least one item.
    host.split('.').next().unwrap_or(host)
}

/// Classify `host` by checking whether its subdomain label ends with `green_suffix`.
///
/// The comparison is case-sensitive and the host is not normalized: `SHOP-TEST.example.com` is
/// blue for the `-test` suffix.
pub fn classify_host(host: &str, green_suffix: &str) -> Classification {
    if subdomain_label(host).ends_with(green_suffix) {
        Classification::Green
    } else {
        Classification::Blue
    }
}

#[cfg(test)]
mod tests {
    use super::{classify_host, subdomain_label, Classification};

    #[test]
    fn subdomain_label_is_leftmost_segment() {
        assert_eq!(subdomain_label("shop-test.example.com"), "shop-test");
        assert_eq!(subdomain_label("shop-test"), "shop-test");
        assert_eq!(subdomain_label(".example.com"), "");
        assert_eq!(subdomain_label(""), "");
    }

    #[test]
    fn test_suffix_on_leftmost_label_is_green() {
        for host in [
            "shop-test.example.com",
            "shop-test",
            "-test.example.com",
            "b-test-test.example.com",
        ] {
            assert_eq!(classify_host(host, "-test"), Classification::Green, "{host}");
        }
    }

    #[test]
    fn everything_else_is_blue() {
        for host in [
            "shop.example.com",
            "atest.example.com",
            "shop-test-1.example.com",
            "SHOP-TEST.example.com",
            "shop-Test.example.com",
            "shop.x-test.example.com",
            "shop.example-test",
            "",
        ] {
            assert_eq!(classify_host(host, "-test"), Classification::Blue, "{host}");
        }
    }

    #[test]
    fn custom_suffix() {
        assert_eq!(
            classify_host("shop-staging.example.com", "-staging"),
            Classification::Green
        );
        assert_eq!(
            classify_host("shop-test.example.com", "-staging"),
            Classification::Blue
        );
    }

    #[test]
    fn renders_lowercase() {
        assert_eq!(Classification::Green.to_string(), "green");
        assert_eq!(Classification::Blue.as_str(), "blue");
        for classification in [Classification::Blue, Classification::Green] {
            assert_eq!(classification.to_string(), classification.as_str());
        }
        assert_eq!(
            serde_json::to_value(Classification::Green).unwrap(),
            serde_json::json!("green")
        );
    }
}
