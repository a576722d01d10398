
mod crd;
