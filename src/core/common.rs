// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Headers shared by every service request

use once_cell::sync::Lazy;

pub const SDK_ANALYTICS_HEADER: &str = "X-IBMCloud-SDK-Analytics";

static USER_AGENT: Lazy<String> = Lazy::new(|| {
    format!(
        "watson-apis-rust-sdk-{} {}-{}",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
});

pub fn user_agent() -> &'static str {
    USER_AGENT.as_str()
}

/// Analytics header identifying the calling operation
pub fn sdk_headers(service_name: &str, service_version: &str, operation_id: &str) -> (String, String) {
    (
        SDK_ANALYTICS_HEADER.to_string(),
        format!(
            "service_name={};service_version={};operation_id={}",
            service_name, service_version, operation_id
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sdk_headers() {
        let (name, value) = sdk_headers("conversation", "V2", "CreateSession");
        assert_eq!(name, "X-IBMCloud-SDK-Analytics");
        assert_eq!(
            value,
            "service_name=conversation;service_version=V2;operation_id=CreateSession"
        );
    }

    #[test]
    fn test_user_agent_mentions_version() {
        assert!(user_agent().starts_with("watson-apis-rust-sdk-"));
        assert!(user_agent().contains(env!("CARGO_PKG_VERSION")));
    }
}
