//! Asset URLs under the deployment base path.
//!
//! `PUBLIC_URL` is read at compile time (e.g. `/shop` when the page is served
//! from a subdirectory). Without it, URLs are anchored at the site root.

const PUBLIC_URL: Option<&str> = option_env!("PUBLIC_URL");

/// Shown for products whose catalog entry has no image.
pub const PLACEHOLDER_IMAGE: &str = "static/img/placeholder.svg";

#[must_use]
pub fn asset_path(relative: &str) -> String {
    join_base(PUBLIC_URL.unwrap_or_default(), relative)
}

/// URL for a product or wishlist thumbnail. Absolute and `data:` URLs pass
/// through untouched.
#[must_use]
pub fn product_image(image_ref: &str) -> String {
    let image_ref = image_ref.trim();
    if image_ref.is_empty() {
        asset_path(PLACEHOLDER_IMAGE)
    } else if ["http://", "https://", "data:"]
        .iter()
        .any(|scheme| image_ref.starts_with(scheme))
    {
        image_ref.to_string()
    } else {
        asset_path(image_ref)
    }
}

fn join_base(base: &str, relative: &str) -> String {
    let mut url = base.trim().trim_end_matches('/').to_string();
    url.push('/');
    url.push_str(relative.trim_start_matches('/'));
    url
}
