pub mod header_cell;
pub mod rendered_row;
pub mod row_shade;
pub mod table_renderer;
