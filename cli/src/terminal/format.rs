use crate::terminal::colors;
use colored::*;
use dualstack_common::network::subnet::Subnet;
use dualstack_core::translator::{self, TranslationResult};
use std::net::Ipv6Addr;

pub type Detail = (String, ColoredString);

pub fn ipv6_to_type_str(ipv6_addr: &Ipv6Addr) -> &'static str {
    if translator::embedded_ipv4(*ipv6_addr).is_some() {
        return "6to4";
    }
    if is_global_unicast(ipv6_addr) {
        return "GUA";
    }
    if ipv6_addr.is_unique_local() {
        return "ULA";
    }
    if ipv6_addr.is_unicast_link_local() {
        return "LLA";
    }
    "IPv6"
}

// 2000::/3
fn is_global_unicast(ipv6_addr: &Ipv6Addr) -> bool {
    let first_byte = ipv6_addr.octets()[0];
    0x3F >= first_byte && first_byte >= 0x20
}

pub fn translation_to_details(result: &TranslationResult) -> Vec<Detail> {
    vec![
        (
            "IPv4".to_string(),
            result.ipv4.to_string().color(colors::IPV4_ADDR),
        ),
        (
            ipv6_to_type_str(&result.ipv6).to_string(),
            result.ipv6.to_string().color(colors::IPV6_ADDR),
        ),
    ]
}

pub fn subnet_to_details(subnet: &Subnet) -> Vec<Detail> {
    let hosts = subnet.hosts();
    let mut details: Vec<Detail> = vec![
        (
            "Network".to_string(),
            format!(
                "{}/{}",
                subnet.network().to_string().color(colors::IPV4_ADDR),
                subnet.prefix().to_string().color(colors::IPV4_PREFIX)
            )
            .normal(),
        ),
        (
            "Netmask".to_string(),
            subnet.netmask().to_string().color(colors::IPV4_ADDR),
        ),
        (
            "Broadcast".to_string(),
            subnet.broadcast().to_string().color(colors::IPV4_ADDR),
        ),
        (
            "Addresses".to_string(),
            group_thousands(subnet.size()).normal(),
        ),
        (
            "Hosts".to_string(),
            group_thousands(subnet.host_count()).bold(),
        ),
    ];

    if !hosts.is_empty() {
        let first = translator::translate(hosts.start_addr);
        let last = translator::translate(hosts.end_addr);
        details.push((
            "IPv6".to_string(),
            format!(
                "{} {} {}",
                first.to_string().color(colors::IPV6_ADDR),
                "..".color(colors::SEPARATOR),
                last.to_string().color(colors::IPV6_ADDR)
            )
            .normal(),
        ));
    }

    details
}

/// Renders `1234567` as `1,234,567`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
