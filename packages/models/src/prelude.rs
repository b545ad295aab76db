pub use super::categories::Entity as Categories;
pub use super::locations::Entity as Locations;
pub use super::posts::Entity as Posts;
pub use super::users::Entity as Users;
