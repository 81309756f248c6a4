use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use proc_macro2::Span;
use toml_edit::{Document, Item, Table};

/// The parsed `Cargo.toml` of the crate currently being expanded.
///
/// Derive output has to name `rc_reflect` items with a path that resolves
/// from the *caller*, which may depend on `rc_reflect` directly or only on
/// the `recast` facade.
///
/// ```rust
/// # use rc_macro_utils::Manifest;
/// let path: syn::Path = Manifest::shared(|m| m.get_crate_path("rc_reflect"));
/// ```
///
/// # Resolution
///
/// For each of `dependencies` then `dev-dependencies`:
///
/// 1. A direct dependency named `name` resolves to `::name`.
/// 2. A `rc_`-prefixed name with a `recast` dependency resolves to
///    `::recast::<short>` (e.g. `rc_reflect` -> `::recast::reflect`).
///
/// If neither table matches, the result is `::name`.
///
/// Inside `rc_reflect` itself, `extern crate self as rc_reflect;` keeps the
/// absolute path valid for doctests and in-crate derives alike.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const FACADE_NAME: &str = "recast";
const CRATE_PREFIX: &str = "rc_";

impl Manifest {
    fn manifest_path() -> Option<PathBuf> {
        let mut path = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR")?);
        path.push("Cargo.toml");
        path.exists().then_some(path)
    }

    fn modified_time(path: &Path) -> Option<SystemTime> {
        std::fs::metadata(path).and_then(|m| m.modified()).ok()
    }

    #[inline(never)]
    fn read_manifest(path: &Path) -> Document<Box<str>> {
        let source = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("unable to read cargo manifest: {}", path.display()))
            .into_boxed_str();
        Document::parse(source)
            .unwrap_or_else(|_| panic!("failed to parse cargo manifest: {}", path.display()))
    }

    fn absolute(segments: &[&str]) -> syn::Path {
        let mut path = syn::Path {
            leading_colon: Some(Default::default()),
            segments: Default::default(),
        };
        for segment in segments {
            path.segments
                .push(syn::Ident::new(segment, Span::call_site()).into());
        }
        path
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::absolute(&[name]));
        }
        let short = name.strip_prefix(CRATE_PREFIX)?;
        deps.contains_key(FACADE_NAME)
            .then(|| Self::absolute(&[FACADE_NAME, short]))
    }

    /// Returns the path of crate `name` as seen from this manifest.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        ["dependencies", "dev-dependencies"]
            .into_iter()
            .find_map(|table| match self.manifest.get(table) {
                Some(Item::Table(deps)) => Self::find_in_deps(deps, name),
                _ => None,
            })
            .unwrap_or_else(|| Self::absolute(&[name]))
    }

    /// Runs `func` with the caller's manifest.
    ///
    /// Parsed manifests are cached per path and re-read when the file's
    /// modification time changes. Without `CARGO_MANIFEST_DIR` an empty
    /// manifest is used, so every lookup falls back to `::name`.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let Some(path) = Self::manifest_path() else {
            return func(&Manifest {
                manifest: Document::parse(Box::<str>::default())
                    .unwrap_or_else(|_| unreachable!("empty manifest is valid toml")),
                modified_time: SystemTime::UNIX_EPOCH,
            });
        };
        let modified_time = Self::modified_time(&path).unwrap_or(SystemTime::UNIX_EPOCH);

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(manifest) = manifests.get(&path)
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }
        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read_manifest(&path),
            modified_time,
        };
        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, manifest);

        result
    }
}

#[cfg(test)]
mod tests {
    use toml_edit::Document;

    use super::Manifest;

    fn manifest(source: &str) -> Manifest {
        Manifest {
            manifest: Document::parse(source.into()).unwrap(),
            modified_time: std::time::SystemTime::UNIX_EPOCH,
        }
    }

    fn path_string(path: &syn::Path) -> String {
        path.segments
            .iter()
            .map(|s| s.ident.to_string())
            .collect::<Vec<_>>()
            .join("::")
    }

    #[test]
    fn direct_dependency() {
        let m = manifest("[dependencies]\nrc_reflect = \"0.0.1\"\n");
        assert_eq!(path_string(&m.get_crate_path("rc_reflect")), "rc_reflect");
    }

    #[test]
    fn through_facade() {
        let m = manifest("[dev-dependencies]\nrecast = \"0.0.1\"\n");
        assert_eq!(path_string(&m.get_crate_path("rc_reflect")), "recast::reflect");
    }

    #[test]
    fn fallback() {
        let m = manifest("[package]\nname = \"x\"\n");
        let path = m.get_crate_path("rc_reflect");
        assert!(path.leading_colon.is_some());
        assert_eq!(path_string(&path), "rc_reflect");
    }
}
