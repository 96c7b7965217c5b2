pub mod affine;
