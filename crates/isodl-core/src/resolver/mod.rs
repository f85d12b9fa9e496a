//! URL resolution.
//!
//! Turns a (family, distro, versions) selection into concrete download
//! items. Each version is resolved independently and in order; the first
//! failure aborts the batch, so callers get every requested item or an error.

use std::sync::Arc;

use crate::domain::{Catalog, Distribution, ResolutionMode, ResolvedItem, VersionSelection};
use crate::error::{CoreError, CoreResult};
use crate::glob::GlobPattern;
use crate::ports::DirectoryListerPort;
use crate::template::{Substitutions, expand};

/// Resolver that consults a directory lister for listing-mode distributions.
pub struct UrlResolver {
    lister: Arc<dyn DirectoryListerPort>,
}

impl UrlResolver {
    /// Create a new resolver with the given directory lister.
    pub fn new(lister: Arc<dyn DirectoryListerPort>) -> Self {
        Self { lister }
    }

    /// Resolve `versions` of `family`/`distro`, preserving their order.
    pub async fn resolve(
        &self,
        catalog: &Catalog,
        family: &str,
        distro: &str,
        versions: &[String],
    ) -> CoreResult<Vec<ResolvedItem>> {
        let record = lookup(catalog, family, distro)?;

        let mut items = Vec::with_capacity(versions.len());
        for version in versions {
            let item = self.resolve_version(record, family, distro, version).await?;
            tracing::debug!(url = %item.url, filename = %item.filename, "Resolved {distro} {version}");
            items.push(item);
        }
        Ok(items)
    }

    /// Expand `selection` against the distribution and resolve the result.
    pub async fn resolve_selection(
        &self,
        catalog: &Catalog,
        family: &str,
        distro: &str,
        selection: &VersionSelection,
    ) -> CoreResult<Vec<ResolvedItem>> {
        let versions = selection.expand(&lookup(catalog, family, distro)?.versions);
        self.resolve(catalog, family, distro, &versions).await
    }

    async fn resolve_version(
        &self,
        record: &Distribution,
        family: &str,
        distro: &str,
        version: &str,
    ) -> CoreResult<ResolvedItem> {
        let full = Substitutions::new()
            .with_base_url(&record.base_url)
            .with_version(version)
            .with_distro(distro);

        match record.mode() {
            Some(ResolutionMode::Listing {
                list_url_template,
                filename_glob,
            }) => {
                let list_url = expand(list_url_template, &full);
                let glob = expand(
                    filename_glob,
                    &Substitutions::new().with_version(version).with_distro(distro),
                );
                let target = format!("{family}/{distro}@{version}");
                self.resolve_from_listing(&list_url, &glob, version, &target)
                    .await
            }
            Some(ResolutionMode::Template {
                url_template,
                filename_template,
            }) => Ok(ResolvedItem::new(
                expand(url_template, &full),
                expand(filename_template, &full),
                version,
            )),
            None => Err(CoreError::config(format!(
                "distribution {family}/{distro} has neither url_template + filename_template \
                 nor list_url_template + filename_glob"
            ))),
        }
    }

    async fn resolve_from_listing(
        &self,
        list_url: &str,
        glob: &str,
        version: &str,
        target: &str,
    ) -> CoreResult<ResolvedItem> {
        tracing::debug!(%list_url, %glob, %target, "Scanning directory listing");
        let files = self.lister.list(list_url).await.map_err(|err| match err {
            CoreError::Fetch { url, message } => CoreError::Fetch {
                url,
                message: format!("{message} (listing for {target})"),
            },
            other => other,
        })?;

        let pattern = GlobPattern::compile(glob);
        let filename = files
            .into_iter()
            .find(|f| pattern.matches(f))
            .ok_or_else(|| CoreError::NoMatch {
                target: target.to_string(),
                glob: glob.to_string(),
                url: list_url.to_string(),
            })?;

        let url = format!("{}/{filename}", list_url.trim_end_matches('/'));
        Ok(ResolvedItem::new(url, filename, version))
    }
}

fn lookup<'a>(catalog: &'a Catalog, family: &str, distro: &str) -> CoreResult<&'a Distribution> {
    catalog
        .family(family)
        .ok_or_else(|| CoreError::family_not_found(family))?
        .distros
        .get(distro)
        .ok_or_else(|| CoreError::distro_not_found(family, distro))
}
