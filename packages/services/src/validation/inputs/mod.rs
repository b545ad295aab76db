mod category;
mod location;
mod post;

pub use category::NewCategoryInput;
pub use location::NewLocationInput;
pub use post::NewPostInput;
