pub mod product_list;
