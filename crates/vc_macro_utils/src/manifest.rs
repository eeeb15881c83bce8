use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// Locates the path under which a workspace crate is reachable from the crate
/// being compiled.
///
/// Derive macros must emit paths that resolve in the *invoking* crate, which
/// may depend on `vc_structs` directly or only on the `vc_inspect` facade.
///
/// # Example
///
/// ```rust
/// # use vc_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("vc_structs"));
/// ```
///
/// Reading the manifest is not free; call this once per macro invocation and
/// pass the result around.
///
/// # Resolution rules
///
/// 1. If the requested crate is listed in `dependencies`, return `::crate_name`.
/// 2. If the requested crate name begins with `vc_` and the invoking crate
///    depends on the facade `vc_inspect`, return `::vc_inspect::short_name`
///    (e.g. `vc_structs` -> `::vc_inspect::structs`).
/// 3. Repeat steps 1-2 in `dev-dependencies`.
/// 4. Otherwise, fall back to the absolute path `::crate_name`.
///
/// ## Note
/// A crate that derives its own traits should add
/// `extern crate self as vc_structs;` to its root so `::vc_structs` resolves.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const FACADE_NAME: &str = "vc_inspect";
const WORKSPACE_PREFIX: &str = "vc_";

impl Manifest {
    #[inline(never)]
    fn get_manifest_path() -> PathBuf {
        env::var_os("CARGO_MANIFEST_DIR")
            .map(|path| {
                let mut path = PathBuf::from(path);
                path.push("Cargo.toml");
                assert!(
                    path.exists(),
                    "Cargo manifest does not exist at path {}",
                    path.display(),
                );
                path
            })
            .expect("CARGO_MANIFEST_DIR should be auto-defined by cargo.")
    }

    #[inline(never)]
    fn get_manifest_modified_time(
        cargo_manifest_path: &Path,
    ) -> Result<SystemTime, std::io::Error> {
        std::fs::metadata(cargo_manifest_path).and_then(|metadata| metadata.modified())
    }

    #[inline(never)]
    fn read_manifest(path: &Path) -> Document<Box<str>> {
        let manifest = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()))
            .into_boxed_str();
        Self::parse_manifest(manifest)
            .unwrap_or_else(|_| panic!("Failed to parse cargo manifest: {}", path.display()))
    }

    #[inline]
    fn parse_manifest(manifest: Box<str>) -> Result<Document<Box<str>>, toml_edit::TomlError> {
        Document::parse(manifest)
    }

    #[inline]
    fn parse_str<T: syn::parse::Parse>(path: &str) -> T {
        syn::parse_str(path).unwrap()
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::parse_str(&format!("::{name}")));
        }

        let module = name.strip_prefix(WORKSPACE_PREFIX)?;
        if !deps.contains_key(FACADE_NAME) {
            return None;
        }
        let mut path = Self::parse_str::<syn::Path>(&format!("::{FACADE_NAME}"));
        path.segments.push(Self::parse_str(module));
        Some(path)
    }

    /// Returns the [`syn::Path`] of the crate `name` as seen from the invoking
    /// crate. See the type documentation for the rules.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        ["dependencies", "dev-dependencies"]
            .into_iter()
            .find_map(|table| match self.manifest.get(table) {
                Some(Item::Table(deps)) => Self::find_in_deps(deps, name),
                _ => None,
            })
            .unwrap_or_else(|| Self::parse_str(&format!("::{name}")))
    }

    /// Runs `func` on the [`Manifest`] of the invoking crate.
    ///
    /// Manifests are cached per path and re-read when the file changes.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let manifest_path = Self::get_manifest_path();
        let modified_time = Self::get_manifest_modified_time(&manifest_path)
            .expect("The Cargo.toml should have a modified time.");

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);

        if let Some(manifest) = manifests.get(&manifest_path)
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }

        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read_manifest(&manifest_path),
            modified_time,
        };

        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}

#[cfg(test)]
mod tests {
    use std::time::SystemTime;

    use quote::ToTokens;

    use super::Manifest;

    fn manifest(toml: &str) -> Manifest {
        Manifest {
            manifest: Manifest::parse_manifest(toml.into()).unwrap(),
            modified_time: SystemTime::UNIX_EPOCH,
        }
    }

    fn resolve(toml: &str, name: &str) -> String {
        manifest(toml).get_crate_path(name).to_token_stream().to_string()
    }

    #[test]
    fn direct_dependency() {
        let toml = "[dependencies]\nvc_structs = \"0.1\"\nvc_inspect = \"0.1\"\n";
        assert_eq!(resolve(toml, "vc_structs"), ":: vc_structs");
    }

    #[test]
    fn through_facade() {
        let toml = "[dev-dependencies]\nvc_inspect = { path = \"..\" }\n";
        assert_eq!(resolve(toml, "vc_structs"), ":: vc_inspect :: structs");
    }

    #[test]
    fn fallback() {
        assert_eq!(resolve("[package]\nname = \"x\"\n", "vc_structs"), ":: vc_structs");
        assert_eq!(resolve("[dependencies]\nvc_inspect = \"0.1\"\n", "serde"), ":: serde");
    }
}
