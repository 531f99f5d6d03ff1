pub mod post_handler;

pub use post_handler::{
    __path_create_post, __path_delete_post, __path_get_post, __path_list_posts,
    __path_update_post, create_post, delete_post, get_post, list_posts, update_post,
};
