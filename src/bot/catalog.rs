//! Catalog search joined with metadata enrichment.

use crate::domain::{CatalogRepository, DomainError, MediaKind, MetadataLookup};

use super::messages;
use super::models::EnrichedTitle;
use super::normalizer::{has_season_marker, infer_kind, normalize_title};

/// Look a title up on the metadata service.
///
/// `Ok(None)` means nothing was found (or the service has no credentials);
/// a failed search call is an `Err`. A failed season lookup only drops the
/// season count.
pub async fn enrich(
    lookup: &dyn MetadataLookup,
    title: &str,
    preferred_kind: Option<MediaKind>,
) -> Result<Option<EnrichedTitle>, DomainError> {
    if !lookup.is_configured() {
        tracing::debug!("Metadata lookup not configured, skipping '{}'", title);
        return Ok(None);
    }

    let kind = preferred_kind.unwrap_or_else(|| infer_kind(title));
    let normalized = normalize_title(title);
    let query = if normalized.is_empty() {
        title.trim().to_string()
    } else {
        normalized
    };

    let Some(hit) = lookup.search(kind, &query).await?.into_iter().next() else {
        tracing::info!("No metadata for '{}' ({:?})", query, kind);
        return Ok(None);
    };

    let season_count = if kind == MediaKind::Series {
        match lookup.season_count(hit.id).await {
            Ok(count) => count,
            Err(e) => {
                tracing::warn!("Season lookup failed for id {}: {}", hit.id, e);
                None
            }
        }
    } else {
        None
    };

    let title = hit
        .title
        .filter(|t| !t.trim().is_empty())
        .or(hit.name.filter(|n| !n.trim().is_empty()))
        .unwrap_or(query);

    Ok(Some(EnrichedTitle {
        title,
        synopsis: hit
            .overview
            .filter(|o| !o.trim().is_empty())
            .unwrap_or_else(|| messages::NO_SYNOPSIS.to_string()),
        poster_url: hit
            .poster_path
            .filter(|p| !p.is_empty())
            .map(|p| lookup.poster_url(&p)),
        release_date: hit
            .release_date
            .filter(|d| !d.is_empty())
            .or(hit.first_air_date.filter(|d| !d.is_empty()))
            .unwrap_or_else(|| messages::UNKNOWN_DATE.to_string()),
        season_count,
    }))
}

pub fn format_enriched(item: &EnrichedTitle) -> String {
    let mut res = format!(
        "🎬 *{}*\n\n📖 {}\n\n📅 Lançamento: {}",
        item.title, item.synopsis, item.release_date
    );

    if let Some(seasons) = item.season_count {
        res.push_str(&format!("\n📺 Temporadas: {}", seasons));
    }
    if let Some(poster) = &item.poster_url {
        res.push_str(&format!("\n🖼️ Pôster: {}", poster));
    }

    res.push_str("\n\n✅ Disponível no nosso catálogo! Digite outro título ou *menu* para voltar.");
    res
}

/// Search the catalog for `search_term` and describe the first match.
pub async fn build_catalog_reply(
    catalog: &dyn CatalogRepository,
    lookup: &dyn MetadataLookup,
    search_term: &str,
) -> Result<String, DomainError> {
    let normalized = normalize_title(search_term);
    let key = if normalized.is_empty() {
        search_term.trim()
    } else {
        normalized.as_str()
    };

    let matches = catalog.find_matches(key).await?;
    tracing::debug!("Catalog search '{}' returned {} rows", key, matches.len());

    let Some(entry) = matches.into_iter().next() else {
        return Ok(messages::catalog_not_found(search_term));
    };

    // A season marker typed by the user still counts when the catalog row lacks one
    let preferred_kind = has_season_marker(search_term).then_some(MediaKind::Series);

    Ok(match enrich(lookup, &entry.title, preferred_kind).await? {
        Some(item) => format_enriched(&item),
        None => messages::catalog_without_details(&entry.title),
    })
}
