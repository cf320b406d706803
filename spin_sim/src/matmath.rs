use std::ops;
use std::fmt;
use serde::{Serialize, Deserialize};

/** Bulk magnetization with the transverse plane collapsed onto a single signed axis.
   z is the longitudinal component, xy the transverse component, both as a fraction of equilibrium */
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Magnetization{
    pub z:f64,
    pub xy:f64
}

impl Magnetization {
    /** Returns a unit vector along the supplied axis. Only 'z' and 'xy' exist in this model */
    pub fn unit(s:&str) -> Option<Magnetization>{
        return match s {
            "z" | "Z" => Some(Magnetization{z:1.0,xy:0.0}),
            "xy" | "XY" => Some(Magnetization{z:0.0,xy:1.0}),
            _ => None,
        }
    }

    /** Returns a null vector where all fields are 0.0 */
    pub fn null() -> Magnetization{
        return Magnetization{z:0.0,xy:0.0};
    }

    /** Thermal equilibrium for a given equilibrium longitudinal magnetization */
    pub fn equilibrium(m0:f64) -> Magnetization {
        return Magnetization{z:m0,xy:0.0};
    }

    pub fn new(z:f64,xy:f64) -> Magnetization {
        return Magnetization{z,xy};
    }

    pub fn mag(&self) -> f64 {
        return self.mag_sq().sqrt();
    }

    pub fn mag_sq(&self) -> f64 {
        return self.z*self.z + self.xy*self.xy;
    }

    pub fn mul_entries(&self,v:&Magnetization) -> Magnetization{
        return Magnetization::new(self.z*v.z,self.xy*v.xy);
    }

    /** Component-wise equality within an absolute tolerance */
    pub fn approx_eq(&self,other:&Magnetization,tol:f64) -> bool {
        (self.z - other.z).abs() <= tol && (self.xy - other.xy).abs() <= tol
    }
}

/** Vector addition */
impl ops::Add<Magnetization> for Magnetization {
    type Output = Magnetization;
    fn add(self, _rhs:Magnetization) -> Magnetization {
        return Magnetization::new(self.z + _rhs.z,self.xy + _rhs.xy);
    }
}

/** Vector subtraction */
impl ops::Sub<Magnetization> for Magnetization {
    type Output = Magnetization;
    fn sub(self, _rhs:Magnetization) -> Magnetization {
        return Magnetization::new(self.z - _rhs.z,self.xy - _rhs.xy);
    }
}

/** Vector dot product */
impl ops::Mul<Magnetization> for Magnetization {
    type Output = f64;
    fn mul(self, _rhs:Magnetization) -> f64 {
        return self.z*_rhs.z + self.xy*_rhs.xy;
    }
}

/** Vector-scalar multiplication */
impl ops::Mul<Magnetization> for f64 {
    type Output = Magnetization;
    fn mul(self,_rhs:Magnetization) -> Magnetization {
        return Magnetization::new(self*_rhs.z, self*_rhs.xy);
    }
}

/** Vector-scalar multiplication (commutative) */
impl ops::Mul<f64> for Magnetization {
    type Output = Magnetization;
    fn mul(self,_rhs:f64) -> Magnetization {
        return Magnetization::new(self.z*_rhs, self.xy*_rhs);
    }
}

/** 2x2 matrix stored as rows. Row a produces the z component, row b the xy component */
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub a:Magnetization,
    pub b:Magnetization
}

impl Matrix{

    pub fn new(a:Magnetization,b:Magnetization) -> Matrix{
        return Matrix{a,b};
    }
    /** Returns the identity matrix */
    pub fn identity() -> Matrix{
        return Matrix{
            a:Magnetization::new(1.0,0.0),
            b:Magnetization::new(0.0,1.0),
        }
    }
    /** Returns Matrix of all zeros */
    pub fn zeros() -> Matrix{
        return Matrix{
            a:Magnetization::null(),
            b:Magnetization::null(),
        }
    }

    pub fn transpose(&self) -> Matrix {
        Matrix::new(
            Magnetization::new(self.a.z,self.b.z),
            Magnetization::new(self.a.xy,self.b.xy),
        )
    }

    pub fn determinant(&self) -> f64 {
        self.a.z*self.b.xy - self.a.xy*self.b.z
    }
}

/** Matrix-vector multiplication */
impl ops::Mul<Magnetization> for Matrix {
    type Output = Magnetization;
    fn mul(self, _rhs:Magnetization) -> Magnetization {
        return Magnetization{z:self.a*_rhs,xy:self.b*_rhs};
    }
}

/** Matrix-matrix multiplication */
impl ops::Mul<Matrix> for Matrix {
    type Output = Matrix;
    fn mul(self, _rhs:Matrix) -> Matrix {
        let cols = _rhs.transpose();
        return Matrix{
            a:Magnetization::new(self.a*cols.a,self.a*cols.b),
            b:Magnetization::new(self.b*cols.a,self.b*cols.b),
        };
    }
}

impl ops::Mul<f64> for Matrix {
    type Output = Matrix;
    fn mul(self,_rhs:f64) -> Matrix{
        return Matrix{a:self.a*_rhs,b:self.b*_rhs};
    }
}

impl fmt::Display for Magnetization {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.z,self.xy)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\n{}\n{}", self.a,self.b)
    }
}


#[cfg(test)]
mod tests {
use super::*;

#[test]
fn mat_vec_multiplication() {
    let m = Matrix::identity();
    for axis in ["z","xy"] {
        let v = Magnetization::unit(axis).unwrap();
        assert_eq!(m*v, v,"asserting equality between {} and {}",m*v,v);
    }
    let swap = Matrix::new(Magnetization::new(0.0,1.0),Magnetization::new(1.0,0.0));
    let v = Magnetization::new(0.3,-0.7);
    assert_eq!(swap*v,Magnetization::new(-0.7,0.3));
}

#[test]
fn vec_dot_product(){
    let v = Magnetization::new(4.0,2.5);
    let w = Magnetization::null();
    assert_eq!(v*w,0.0);

    let w = Magnetization::new(2.0,1.0);
    assert_eq!(v*w,10.5,"asserting equality between {} and {}",v*w,10.5);
}

#[test]
fn vec_addition_subtraction(){
    let v = Magnetization::new(4.0,2.5);
    let w = Magnetization::new(2.0,1.0);
    assert_eq!(v+w,Magnetization::new(6.0,3.5));
    assert_eq!(w+v,Magnetization::new(6.0,3.5));
    assert_eq!(v-w,Magnetization::new(2.0,1.5));
    assert_eq!(w-v,Magnetization::new(-2.0,-1.5));
}

#[test]
fn matrix_product_and_determinant(){
    let m = Matrix::new(Magnetization::new(1.0,2.0),Magnetization::new(3.0,4.0));
    assert_eq!(m*Matrix::identity(),m);
    assert_eq!(Matrix::identity()*m,m);
    assert_eq!(m.determinant(),-2.0);
    assert_eq!(m.transpose().transpose(),m);
    assert_eq!(m*Matrix::zeros(),Matrix::zeros());
}

#[test]
fn scalar_multiplication_and_tolerance(){
    let v = Magnetization::unit("z").unwrap();
    assert_eq!(2.0*v,Magnetization::new(2.0,0.0));
    assert_eq!(v*2.0,2.0*v);
    assert!(Magnetization::new(1.0,1e-9).approx_eq(&v,1e-8));
    assert!(!Magnetization::new(1.0,1e-6).approx_eq(&v,1e-8));
    assert!(Magnetization::unit("x").is_none());
    assert_eq!(Magnetization::new(3.0,4.0).mag(),5.0);
}
}
