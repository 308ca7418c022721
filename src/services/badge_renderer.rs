use crate::config::constants::BADGE_LABEL;
use crate::enums::badge_status::BadgeStatus;

/// Render the public status badge: fixed two-segment 100x20 SVG where the
/// only variable content is the status text and its fill color. Scores and
/// findings never appear here; the badge endpoint is unauthenticated.
pub fn render(status: BadgeStatus) -> String {
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="20">
  <linearGradient id="b" x2="0" y2="100%">
    <stop offset="0" stop-color="#bbb" stop-opacity=".1"/>
    <stop offset="1" stop-opacity=".1"/>
  </linearGradient>
  <mask id="a">
    <rect width="100" height="20" rx="3" fill="#fff"/>
  </mask>
  <g mask="url(#a)">
    <path fill="#555" d="M0 0h63v20H0z"/>
    <path fill="{color}" d="M63 0h37v20H63z"/>
    <path fill="url(#b)" d="M0 0h100v20H0z"/>
  </g>
  <g fill="#fff" text-anchor="middle" font-family="DejaVu Sans,Verdana,Geneva,sans-serif" font-size="11">
    <text x="31.5" y="15" fill="#010101" fill-opacity=".3">{label}</text>
    <text x="31.5" y="14">{label}</text>
    <text x="81.5" y="15" fill="#010101" fill-opacity=".3">{text}</text>
    <text x="81.5" y="14">{text}</text>
  </g>
</svg>"##,
        color = status.color(),
        label = BADGE_LABEL,
        text = status.text(),
    )
}
