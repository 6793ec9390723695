//! Process constants.
//!
//! The responder has no configuration file and reads no environment for its
//! network binding or routes. Everything it serves is fixed at compile time;
//! only logging can be tuned from the command line.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

// =============================================================================
// Network Binding
// =============================================================================

/// Wildcard address so the process is reachable from outside the host
/// (containers, load balancer probes).
pub const HTTP_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Fixed listening port
pub const HTTP_PORT: u16 = 8080;

/// Address the listener binds to at startup.
pub const fn listen_addr() -> SocketAddr {
    SocketAddr::new(HTTP_HOST, HTTP_PORT)
}

// =============================================================================
// Routes and Payloads
// =============================================================================

/// Health-check route polled by infrastructure
pub const HEALTH_PATH: &str = "/actuator/health";

/// Root route serving the banner
pub const ROOT_PATH: &str = "/";

/// Status reported by the health-check route
pub const HEALTH_STATUS_UP: &str = "UP";

/// Banner returned by the root route
pub const ROOT_BANNER: &str = "BlueGreen Running";

// =============================================================================
// Logging
// =============================================================================

/// Default log filter when neither `--log-level` nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "bluegreen=info";
