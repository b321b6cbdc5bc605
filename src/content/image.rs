//! Image reference resolution.
//!
//! The CMS delivers images as references like `image-<assetId>-<WxH>-<format>`
//! which resolve to the content host's CDN image pipeline. A missing or
//! malformed reference resolves to the empty string so an `<img>` never gets
//! a broken half-built URL.

use serde::{Deserialize, Serialize};

const CDN_BASE: &str = "https://cdn.sanity.io/images";

// Compile-time fallbacks so the browser bundle can build URLs without the
// server's runtime environment.
const PROJECT_ID: &str = match option_env!("PORTFOLIO_SANITY_PROJECT_ID") {
    Some(id) => id,
    None => "",
};
const DATASET: &str = match option_env!("PORTFOLIO_SANITY_DATASET") {
    Some(ds) => ds,
    None => "production",
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    #[serde(default)]
    pub asset: Option<AssetRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetRef {
    #[serde(rename = "_ref", default)]
    pub reference: String,
}

/// Renderable URL for an optional image reference, using the project and
/// dataset baked in at compile time. Absent images yield `""`.
pub fn url_for(image: Option<&ImageRef>) -> String {
    cdn_url(PROJECT_ID, DATASET, image)
}

/// `image-<assetId>-<WxH>-<format>` → `{CDN_BASE}/{project}/{dataset}/<assetId>-<WxH>.<format>`
pub fn cdn_url(project_id: &str, dataset: &str, image: Option<&ImageRef>) -> String {
    let Some(asset) = image.and_then(|i| i.asset.as_ref()) else {
        return String::new();
    };
    let Some((asset_id, dimensions, format)) = parse_ref(&asset.reference) else {
        return String::new();
    };
    if project_id.is_empty() {
        return String::new();
    }
    format!("{CDN_BASE}/{project_id}/{dataset}/{asset_id}-{dimensions}.{format}")
}

fn parse_ref(reference: &str) -> Option<(&str, &str, &str)> {
    let rest = reference.strip_prefix("image-")?;
    let (rest, format) = rest.rsplit_once('-')?;
    let (asset_id, dimensions) = rest.rsplit_once('-')?;
    let (w, h) = dimensions.split_once('x')?;
    if asset_id.is_empty()
        || format.is_empty()
        || !w.bytes().all(|b| b.is_ascii_digit())
        || !h.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    Some((asset_id, dimensions, format))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(reference: &str) -> ImageRef {
        ImageRef {
            asset: Some(AssetRef {
                reference: reference.to_string(),
            }),
        }
    }

    #[test]
    fn resolves_reference_to_cdn_url() {
        let img = image("image-41dee29a94b78c8000a1a5c2ee84be8d4c3b0a2e-2000x1333-png");
        assert_eq!(
            cdn_url("abc123", "production", Some(&img)),
            "https://cdn.sanity.io/images/abc123/production/41dee29a94b78c8000a1a5c2ee84be8d4c3b0a2e-2000x1333.png"
        );
    }

    #[test]
    fn missing_image_resolves_to_empty_source() {
        assert_eq!(cdn_url("abc123", "production", None), "");
        assert_eq!(
            cdn_url("abc123", "production", Some(&ImageRef::default())),
            ""
        );
    }

    #[test]
    fn malformed_references_resolve_to_empty_source() {
        for bad in [
            "",
            "image-",
            "not-an-image-ref",
            "image-abcdef",
            "image-abcdef-2000x1333",
            "image-abcdef-helloxworld-png",
        ] {
            assert_eq!(cdn_url("abc123", "production", Some(&image(bad))), "");
        }
    }

    #[test]
    fn unconfigured_project_resolves_to_empty_source() {
        let img = image("image-abcdef0123-100x100-webp");
        assert_eq!(cdn_url("", "production", Some(&img)), "");
    }

    #[test]
    fn image_ref_deserializes_from_cms_shape() {
        let raw = serde_json::json!({
            "_type": "image",
            "asset": { "_ref": "image-abc-64x64-svg", "_type": "reference" }
        });
        let img: ImageRef = serde_json::from_value(raw).unwrap();
        assert_eq!(img.asset.unwrap().reference, "image-abc-64x64-svg");
    }
}
