#[path = "components/badge.rs"]
mod badge;



#[path = "components/chunk_list_header.rs"]
mod chunk_list_header;


#[path = "components/scrollbar_helper.rs"]
mod scrollbar_helper;

#[path = "components/status_bar.rs"]
mod status_bar;
