use std::sync::Arc;

use crate::{
    error::NetworkSpecError,
    networks::{Network, NetworkSpec},
};

const OPT_INDENT: usize = 2;
const MSG_INDENT: usize = 7;
const SCREEN_WIDTH: usize = 79;

/// Returns the identity for a canonical chain name (`main`, `test`, `regtest`
/// or `stn`). Matching is exact and case-sensitive.
pub fn create_network_spec(network_string: &str) -> Result<Arc<NetworkSpec>, NetworkSpecError> {
    network_string.parse::<Network>().map(|network| network.spec())
}

pub fn network_parser(network_string: &str) -> Result<Arc<NetworkSpec>, String> {
    create_network_spec(network_string).map_err(|err| err.to_string())
}

/// Appends the usage text for the chain selection flags to `buffer`. `-stn` is
/// only described when `include_debug_options` is set.
pub fn append_help_text(buffer: &mut String, include_debug_options: bool) {
    push_group(buffer, "Chain selection options:");
    push_opt(buffer, "-testnet", "Use the test chain");
    push_opt(
        buffer,
        "-regtest",
        "Enter regression test mode, which uses a special chain in which blocks can be solved \
         instantly. This is intended for regression testing tools and app development.",
    );
    if include_debug_options {
        push_opt(buffer, "-stn", "Use the Scaling Test Network");
    }
}

fn push_group(buffer: &mut String, heading: &str) {
    buffer.push_str(heading);
    buffer.push_str("\n\n");
}

fn push_opt(buffer: &mut String, option: &str, message: &str) {
    buffer.push_str(&" ".repeat(OPT_INDENT));
    buffer.push_str(option);
    buffer.push('\n');
    push_paragraph(buffer, message, SCREEN_WIDTH - MSG_INDENT, MSG_INDENT);
    buffer.push_str("\n\n");
}

// Greedy word wrap, every line indented. Words longer than `width` get a line
// of their own.
fn push_paragraph(buffer: &mut String, message: &str, width: usize, indent: usize) {
    let mut line_len = 0;
    for word in message.split_whitespace() {
        if line_len > 0 && line_len + 1 + word.len() > width {
            buffer.push('\n');
            line_len = 0;
        }
        if line_len == 0 {
            buffer.push_str(&" ".repeat(indent));
        } else {
            buffer.push(' ');
            line_len += 1;
        }
        buffer.push_str(word);
        line_len += word.len();
    }
}
