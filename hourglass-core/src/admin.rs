//! Runtime control commands parsed from `/admin/<action>/<host>` paths

use crate::blocklist::BlockList;
use crate::error::AdminError;
use url::Url;

/// Mutations the admin endpoint knows how to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAction {
    Block,
    Unblock,
}

impl AdminAction {
    fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "block" => Some(Self::Block),
            "unblock" => Some(Self::Unblock),
            _ => None,
        }
    }
}

/// Validate a host segment by round-tripping it through a URL parse
///
/// The segment is parsed as the authority of an `http` URL and the host is
/// rebuilt from the parsed parts, so percent-encoding is decoded and junk
/// like embedded spaces is rejected. An explicit port is kept.
fn parse_host_segment(segment: &str) -> Result<String, AdminError> {
    let url = Url::parse(&format!("http://{segment}")).map_err(|source| AdminError::HostParse {
        segment: segment.to_string(),
        source,
    })?;

    let host = url.host_str().ok_or_else(|| AdminError::HostParse {
        segment: segment.to_string(),
        source: url::ParseError::EmptyHost,
    })?;

    Ok(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}

/// A parsed admin request
///
/// An unrecognized action parses successfully with [`AdminCommand::action`]
/// of `None`; applying it changes nothing. Only a path with too few
/// segments or an invalid host is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCommand {
    pub action: Option<AdminAction>,
    pub host: String,
}

impl AdminCommand {
    /// Parse a request path of the form `/admin/<action>/<host>`
    pub fn parse(path: &str) -> Result<Self, AdminError> {
        let segments: Vec<&str> = path.split('/').collect();
        if segments.len() < 4 {
            return Err(AdminError::MalformedPath {
                path: path.to_string(),
            });
        }

        let action = AdminAction::from_segment(segments[2]);
        let host = parse_host_segment(segments[3])?;

        Ok(Self { action, host })
    }

    /// Run the command against a block list and describe what happened
    pub fn apply(&self, list: &BlockList) -> String {
        match self.action {
            Some(AdminAction::Block) => {
                list.add(&self.host);
                format!("added {:?} to the block list", self.host)
            }
            Some(AdminAction::Unblock) => {
                list.remove(&self.host);
                format!("removed {:?} from the block list", self.host)
            }
            None => format!("no admin action taken for {:?}", self.host),
        }
    }
}
