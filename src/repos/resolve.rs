use once_cell::sync::Lazy;
use regex::Regex;

static COLLAB_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:/Collabs/)(.*?)(?:/.*$|$)").expect("collab url pattern is valid")
});

pub const HOME_DIR: &str = "/mnt/user/drive/My Libraries/My Library/";
pub const GROUP_DIR: &str = "/mnt/user/drive/Shared with groups/";
pub const SHARED_DIR: &str = "/mnt/user/shared/";

const GROUP_NAME_SEGMENT: usize = 5;
const SHARED_NAME_SEGMENT: usize = 4;

/// Extracts the collab name from a wiki URL such as
/// `https://wiki.ebrains.eu/bin/view/Collabs/collab-testing/subpage`.
///
/// Input without a `/Collabs/` segment is taken as the name itself.
pub fn collab_name_from_url(url: &str) -> &str {
    COLLAB_URL
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map_or(url, |m| m.as_str())
}

/// Where a path lives in the Lab's Drive mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountPath<'a> {
    /// Under the user's own "My Library".
    Home,
    /// Under "Shared with groups", with the collab name taken from the path.
    Group(&'a str),
    /// Under the shared mount, with the collab name taken from the path.
    Shared(&'a str),
}

impl<'a> MountPath<'a> {
    /// Splits on `/` and picks the name at a fixed depth. Any other mount
    /// layout gives wrong names.
    pub fn classify(path: &'a str) -> Option<MountPath<'a>> {
        if path.starts_with(HOME_DIR) {
            Some(MountPath::Home)
        } else if path.starts_with(GROUP_DIR) {
            path.split('/').nth(GROUP_NAME_SEGMENT).map(MountPath::Group)
        } else if path.starts_with(SHARED_DIR) {
            path.split('/').nth(SHARED_NAME_SEGMENT).map(MountPath::Shared)
        } else {
            None
        }
    }
}
