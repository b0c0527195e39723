pub(crate) mod post_card;
pub(crate) mod post_detail;
pub(crate) mod post_form;
pub(crate) mod score_badge;
